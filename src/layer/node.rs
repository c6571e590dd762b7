use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{AxisKind, MaskColor, Point, ViewSize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClipSettings {
    pub recompute_on_new_frame: bool,
    pub min_percentile: f64,
    pub max_percentile: f64,
}

impl Default for ClipSettings {
    fn default() -> Self {
        Self {
            recompute_on_new_frame: true,
            min_percentile: 0.025,
            max_percentile: 0.975,
        }
    }
}

/// Capabilities shared by single images and groups of layers.
pub trait LayerNode {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: &str) -> bool;

    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool) -> bool;
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool) -> bool;

    /// A placeholder image, or a group without any loaded image below it.
    fn is_empty(&self) -> bool;

    fn frame_count(&self, axis: AxisKind) -> usize;
    fn axis_types(&self) -> Vec<AxisKind>;
    fn display_axes(&self) -> Vec<AxisKind>;

    /// Axes not drawn on screen, i.e. the ones stepped through by frame.
    fn hidden_axes(&self) -> Vec<AxisKind> {
        let display = self.display_axes();
        self.axis_types()
            .into_iter()
            .filter(|axis| !display.contains(axis))
            .collect()
    }

    fn is_descendant(&self, id: &str) -> bool;
    fn layer_ids(&self) -> Vec<String>;

    fn zoom(&self) -> f64;
    fn set_zoom(&mut self, zoom: f64);
    fn reset_zoom(&mut self);
    fn center_pixel(&self) -> Option<Point>;
    fn set_pan(&mut self, center: Point);
    fn reset_pan(&mut self);
    fn image_pt(&self, screen: Point) -> Option<Point>;
    /// Like [`LayerNode::image_pt`] without the image bounds check.
    fn screen_to_image(&self, screen: Point) -> Option<Point>;

    fn view_resize(&mut self, size: ViewSize);
    fn grid_changed(&mut self, grid: &Value);
    fn display_axes_changed(&mut self, axes: &[AxisKind], frames: &[usize]);
    fn load(&mut self, frames: &[usize], clip: ClipSettings);

    fn set_mask_color(&mut self, color: MaskColor) -> bool;
    fn set_mask_alpha(&mut self, alpha: u8) -> bool;
}
