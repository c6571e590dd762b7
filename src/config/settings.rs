use serde::{Deserialize, Serialize};

use crate::layer::{ClipSettings, CompositionMode};
use crate::model::{SkyCs, ViewSize};
use crate::render::AspectRatio;

use super::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveSettings {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: AspectRatio,
}

impl Default for SaveSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            aspect_ratio: AspectRatio::Keep,
        }
    }
}

impl SaveSettings {
    pub fn size(&self) -> ViewSize {
        ViewSize::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackConfig {
    pub sky_cs: SkyCs,
    pub composition_mode: CompositionMode,
    pub clip: ClipSettings,
    pub save: SaveSettings,
    /// Size of the view new layers are laid out for.
    pub view: ViewSize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            sky_cs: SkyCs::default(),
            composition_mode: CompositionMode::default(),
            clip: ClipSettings::default(),
            save: SaveSettings::default(),
            view: ViewSize::new(512, 512),
        }
    }
}

impl StackConfig {
    pub fn validate(&self) -> Result<()> {
        let clip = self.clip;
        let in_range = |value: f64| (0.0..=1.0).contains(&value);
        if !in_range(clip.min_percentile) || !in_range(clip.max_percentile) {
            return Err(ConfigError::Invalid(format!(
                "clip percentiles must lie in [0, 1], got {} and {}",
                clip.min_percentile, clip.max_percentile
            )));
        }
        if clip.min_percentile >= clip.max_percentile {
            return Err(ConfigError::Invalid(format!(
                "minimum clip percentile {} must be below maximum {}",
                clip.min_percentile, clip.max_percentile
            )));
        }
        if self.save.width == 0 || self.save.height == 0 {
            return Err(ConfigError::Invalid("save size must be non-zero".into()));
        }
        Ok(())
    }
}
