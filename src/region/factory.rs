use serde_json::Value;

use super::{Region, RegionError, Result};

/// Rebuilds regions from their persisted sub-state.
pub trait RegionFactory {
    fn make_region(&self, state: &Value) -> Result<Region>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRegionFactory;

impl RegionFactory for JsonRegionFactory {
    fn make_region(&self, state: &Value) -> Result<Region> {
        let region: Region = serde_json::from_value(state.clone())?;
        if region.id().is_empty() {
            return Err(RegionError::Invalid {
                id: String::new(),
                reason: "region id is empty".to_string(),
            });
        }
        region
            .shape()
            .validate()
            .map_err(|reason| RegionError::Invalid {
                id: region.id().to_string(),
                reason,
            })?;
        Ok(region)
    }
}
