use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{AxisKind, ImageMeta, MaskColor, Point, ViewSize};

use super::transform::ViewTransform;
use super::{ClipSettings, LayerNode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLayer {
    id: String,
    name: String,
    visible: bool,
    selected: bool,
    #[serde(default)]
    empty: bool,
    meta: ImageMeta,
    mask: MaskColor,
    mask_alpha: u8,
    transform: ViewTransform,
    display_axes: Vec<AxisKind>,
    #[serde(default)]
    clip: ClipSettings,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    grid: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    frames: Vec<usize>,
}

impl ImageLayer {
    pub fn new(id: impl Into<String>, meta: ImageMeta, view_size: ViewSize) -> Self {
        let name = meta
            .title
            .clone()
            .or_else(|| {
                meta.source
                    .as_ref()
                    .and_then(|path| path.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_default();
        let display_axes = meta.dims.iter().take(2).map(|dim| dim.axis).collect();
        Self {
            id: id.into(),
            name,
            visible: true,
            selected: false,
            empty: false,
            transform: ViewTransform::new(meta.width(), meta.height(), view_size),
            meta,
            mask: MaskColor::default(),
            mask_alpha: 255,
            display_axes,
            clip: ClipSettings::default(),
            grid: Value::Null,
            frames: Vec::new(),
        }
    }

    pub fn meta(&self) -> &ImageMeta {
        &self.meta
    }

    pub fn mask(&self) -> MaskColor {
        self.mask
    }

    pub fn mask_alpha(&self) -> u8 {
        self.mask_alpha
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn clip(&self) -> ClipSettings {
        self.clip
    }

    pub fn grid(&self) -> &Value {
        &self.grid
    }

    /// Frame vector of the last load.
    pub fn frames(&self) -> &[usize] {
        &self.frames
    }

    pub(crate) fn truncate(&mut self) {
        self.grid = Value::Null;
        self.frames.clear();
    }
}

impl LayerNode for ImageLayer {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) -> bool {
        if self.name == name {
            return false;
        }
        self.name = name.to_string();
        true
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) -> bool {
        std::mem::replace(&mut self.visible, visible) != visible
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) -> bool {
        std::mem::replace(&mut self.selected, selected) != selected
    }

    fn is_empty(&self) -> bool {
        self.empty
    }

    fn frame_count(&self, axis: AxisKind) -> usize {
        self.meta.frame_count(axis)
    }

    fn axis_types(&self) -> Vec<AxisKind> {
        self.meta.axis_types()
    }

    fn display_axes(&self) -> Vec<AxisKind> {
        self.display_axes.clone()
    }

    fn is_descendant(&self, id: &str) -> bool {
        self.id == id
    }

    fn layer_ids(&self) -> Vec<String> {
        vec![self.id.clone()]
    }

    fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.transform.set_zoom(zoom);
    }

    fn reset_zoom(&mut self) {
        self.transform.reset_zoom();
    }

    fn center_pixel(&self) -> Option<Point> {
        Some(self.transform.center)
    }

    fn set_pan(&mut self, center: Point) {
        self.transform.set_pan(center);
    }

    fn reset_pan(&mut self) {
        self.transform
            .reset_pan(self.meta.width(), self.meta.height());
    }

    fn image_pt(&self, screen: Point) -> Option<Point> {
        if self.empty {
            return None;
        }
        self.transform
            .image_pt(screen, self.meta.width(), self.meta.height())
    }

    fn screen_to_image(&self, screen: Point) -> Option<Point> {
        (!self.empty).then(|| self.transform.screen_to_image(screen))
    }

    fn view_resize(&mut self, size: ViewSize) {
        self.transform.view_size = size;
    }

    fn grid_changed(&mut self, grid: &Value) {
        self.grid = grid.clone();
    }

    fn display_axes_changed(&mut self, axes: &[AxisKind], frames: &[usize]) {
        let available = self.meta.axis_types();
        if axes.len() == 2 && axes[0] != axes[1] && axes.iter().all(|axis| available.contains(axis))
        {
            self.display_axes = axes.to_vec();
        }
        self.frames = frames.to_vec();
    }

    fn load(&mut self, frames: &[usize], clip: ClipSettings) {
        self.frames = frames.to_vec();
        self.clip = clip;
    }

    fn set_mask_color(&mut self, color: MaskColor) -> bool {
        std::mem::replace(&mut self.mask, color) != color
    }

    fn set_mask_alpha(&mut self, alpha: u8) -> bool {
        std::mem::replace(&mut self.mask_alpha, alpha) != alpha
    }
}
