use serde::Serialize;

use crate::layer::Layer;
use crate::model::{SkyCs, ViewSize};

/// Everything a draw collaborator needs for one composite: snapshots of the
/// drawable layers in stack order and the frame of every known axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub layers: Vec<Layer>,
    pub frames: Vec<usize>,
    pub cs: SkyCs,
    /// Position of the current layer in the full stack.
    pub top_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_size: Option<ViewSize>,
}

impl RenderRequest {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
