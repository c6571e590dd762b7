use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RegionPosition, RegionShape, Result};

/// Separators that make an id a child of another, e.g. `r1.1` under `r1`.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    shape: RegionShape,
    #[serde(default)]
    position: RegionPosition,
}

impl Region {
    pub fn new(id: impl Into<String>, shape: RegionShape) -> Self {
        Self {
            id: id.into(),
            name: None,
            shape,
            position: RegionPosition::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn shape(&self) -> &RegionShape {
        &self.shape
    }

    pub fn position(&self) -> RegionPosition {
        self.position
    }

    /// True when this region's id starts with `id`.
    pub fn is_match(&self, id: &str) -> bool {
        self.id.starts_with(id)
    }

    pub fn state(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
