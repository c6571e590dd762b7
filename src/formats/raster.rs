use std::path::Path;

use crate::model::{AxisKind, Dim, ImageMeta};

use super::Result;
use super::util::meta_for_dims;

/// Shape of a PNG/JPEG image; only the header is decoded.
pub(crate) fn read_raster_meta(path: &Path) -> Result<ImageMeta> {
    let (width, height) = image::image_dimensions(path)?;
    Ok(meta_for_dims(
        path,
        vec![
            Dim::new(AxisKind::DirectionLon, width as usize),
            Dim::new(AxisKind::DirectionLat, height as usize),
        ],
    ))
}
