mod composition;
mod error;
mod group;
mod image;
mod node;
mod transform;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use composition::CompositionMode;
pub use error::{LayerError, Result};
pub use group::LayerGroup;
pub use image::ImageLayer;
pub use node::{ClipSettings, LayerNode};
pub use transform::{MAX_ZOOM, MIN_ZOOM, ViewTransform, ZOOM_STEP, image_center, stepped_zoom};

/// One entry of a layer tree: a single image or a nested group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Layer {
    Image(ImageLayer),
    Group(LayerGroup),
}

impl Layer {
    pub fn node(&self) -> &dyn LayerNode {
        match self {
            Layer::Image(image) => image,
            Layer::Group(group) => group,
        }
    }

    pub fn node_mut(&mut self) -> &mut dyn LayerNode {
        match self {
            Layer::Image(image) => image,
            Layer::Group(group) => group,
        }
    }

    pub fn as_image(&self) -> Option<&ImageLayer> {
        match self {
            Layer::Image(image) => Some(image),
            Layer::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&LayerGroup> {
        match self {
            Layer::Group(group) => Some(group),
            Layer::Image(_) => None,
        }
    }

    /// Visible and backed by data: takes part in composition.
    pub fn is_drawable(&self) -> bool {
        let node = self.node();
        node.is_visible() && !node.is_empty()
    }

    /// Serialized sub-state. A truncated state leaves out per-session detail
    /// (grid settings, last loaded frames).
    pub fn state(&self, truncate: bool) -> Result<Value> {
        if !truncate {
            return Ok(serde_json::to_value(self)?);
        }
        let mut copy = self.clone();
        match &mut copy {
            Layer::Image(image) => image.truncate(),
            Layer::Group(group) => group.truncate(),
        }
        Ok(serde_json::to_value(&copy)?)
    }

    pub fn from_state(state: &Value) -> Result<Self> {
        let layer: Layer = serde_json::from_value(state.clone())?;
        if let Layer::Image(image) = &layer
            && !image.is_empty()
        {
            image.meta().validate()?;
        }
        Ok(layer)
    }
}
