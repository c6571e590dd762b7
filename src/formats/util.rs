use std::path::Path;

use crate::model::{Dim, ImageMeta};

use super::{IoError, Result};

pub(crate) fn extension(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .ok_or_else(|| IoError::UnsupportedFormat(path.to_string_lossy().to_string()))?;
    Ok(ext)
}

pub(crate) fn meta_for_dims(path: &Path, dims: Vec<Dim>) -> ImageMeta {
    ImageMeta {
        dims,
        title: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        source: Some(path.to_path_buf()),
    }
}
