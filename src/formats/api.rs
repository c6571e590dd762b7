use std::path::Path;

use crate::model::ImageMeta;

use super::header::read_header_meta;
use super::raster::read_raster_meta;
use super::tiff::read_tiff_meta;
use super::util::extension;
use super::{IoError, Result};

pub fn read_image_meta(path: impl AsRef<Path>) -> Result<ImageMeta> {
    let path = path.as_ref();
    let extension = extension(path)?;
    let meta = match extension.as_str() {
        "json" => read_header_meta(path, false)?,
        "yaml" | "yml" => read_header_meta(path, true)?,
        "png" | "jpg" | "jpeg" => read_raster_meta(path)?,
        "tif" | "tiff" => read_tiff_meta(path)?,
        other => return Err(IoError::UnsupportedFormat(other.to_string())),
    };
    meta.validate()?;
    Ok(meta)
}

pub fn supported_formats() -> &'static [&'static str] {
    &["json", "yaml", "yml", "png", "jpg", "jpeg", "tif", "tiff"]
}
