use std::fs;
use std::path::Path;

use crate::model::ImageMeta;

use super::Result;

/// Reads a JSON or YAML image description (`dims`, optional `title`).
pub(crate) fn read_header_meta(path: &Path, yaml: bool) -> Result<ImageMeta> {
    let raw = fs::read_to_string(path)?;
    let mut meta = if yaml {
        serde_yaml::from_str::<ImageMeta>(&raw)?
    } else {
        serde_json::from_str::<ImageMeta>(&raw)?
    };
    if meta.source.is_none() {
        meta.source = Some(path.to_path_buf());
    }
    Ok(meta)
}
