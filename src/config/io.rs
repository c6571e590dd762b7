use std::fs;
use std::path::Path;

use super::{Result, StackConfig};

pub fn load_config(path: impl AsRef<Path>) -> Result<StackConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let config = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<StackConfig>(&raw)?
    } else {
        serde_json::from_str::<StackConfig>(&raw)?
    };
    config.validate()?;
    Ok(config)
}
