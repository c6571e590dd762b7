use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{AxisKind, MaskColor, Point, ViewSize};

use super::{ClipSettings, CompositionMode, Layer, LayerError, LayerNode, Result};

/// Ordered layers; position is composition order, the head is drawn first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerGroup {
    id: String,
    name: String,
    visible: bool,
    selected: bool,
    composition_mode: CompositionMode,
    #[serde(default)]
    children: Vec<Layer>,
}

impl LayerGroup {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            visible: true,
            selected: false,
            composition_mode: CompositionMode::default(),
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Layer] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Layer> {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn composition_mode(&self) -> CompositionMode {
        self.composition_mode
    }

    pub fn push(&mut self, layer: Layer) -> usize {
        self.children.push(layer);
        self.children.len() - 1
    }

    /// Child layers that take part in composition.
    pub fn drawable(&self) -> impl Iterator<Item = (usize, &Layer)> {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, layer)| layer.is_drawable())
    }

    pub fn visible_count(&self) -> usize {
        self.drawable().count()
    }

    pub fn find(&self, id: &str) -> Option<&Layer> {
        self.children.iter().find_map(|child| match child {
            _ if child.node().id() == id => Some(child),
            Layer::Group(group) => group.find(id),
            Layer::Image(_) => None,
        })
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Layer> {
        for child in &mut self.children {
            if child.node().id() == id {
                return Some(child);
            }
            if let Layer::Group(group) = child
                && let Some(found) = group.find_mut(id)
            {
                return Some(found);
            }
        }
        None
    }

    /// Removes the layer with `id` wherever it sits in the tree.
    pub fn close_data(&mut self, id: &str) -> Option<Layer> {
        if let Some(position) = self
            .children
            .iter()
            .position(|child| child.node().id() == id)
        {
            return Some(self.children.remove(position));
        }
        self.children.iter_mut().find_map(|child| match child {
            Layer::Group(group) => group.close_data(id),
            Layer::Image(_) => None,
        })
    }

    pub fn set_layer_visible(&mut self, id: &str, visible: bool) -> Result<bool> {
        self.target_mut(id).map(|layer| layer.set_visible(visible))
    }

    pub fn set_layer_name(&mut self, id: &str, name: &str) -> Result<bool> {
        self.target_mut(id).map(|layer| layer.set_name(name))
    }

    pub fn set_layer_mask_color(&mut self, id: &str, color: MaskColor) -> Result<bool> {
        self.target_mut(id).map(|layer| layer.set_mask_color(color))
    }

    pub fn set_layer_mask_alpha(&mut self, id: &str, alpha: u8) -> Result<bool> {
        self.target_mut(id).map(|layer| layer.set_mask_alpha(alpha))
    }

    /// `id` may name this group itself or any group below it.
    pub fn set_composition_mode(&mut self, id: &str, mode: CompositionMode) -> Result<bool> {
        if self.id == id {
            return Ok(std::mem::replace(&mut self.composition_mode, mode) != mode);
        }
        match self.find_mut(id) {
            Some(Layer::Group(group)) => Ok(std::mem::replace(&mut group.composition_mode, mode) != mode),
            Some(Layer::Image(_)) => Err(LayerError::NotAGroup(id.to_string())),
            None => Err(LayerError::NotFound(id.to_string())),
        }
    }

    /// Selects exactly the layers named in `ids`, at any depth.
    pub fn set_selected_ids(&mut self, ids: &[String]) -> bool {
        let mut changed = false;
        for child in &mut self.children {
            let wanted = ids.iter().any(|id| id == child.node().id());
            changed |= child.node_mut().set_selected(wanted);
            if let Layer::Group(group) = child {
                changed |= group.set_selected_ids(ids);
            }
        }
        changed
    }

    /// Wraps the selected top-level layers into a new group placed where the
    /// first of them was. Needs at least two selected layers.
    pub fn group_selected(&mut self, group_id: impl Into<String>) -> bool {
        let selected = self
            .children
            .iter()
            .filter(|child| child.node().is_selected())
            .count();
        if selected < 2 {
            return false;
        }
        let Some(insert_at) = self
            .children
            .iter()
            .position(|child| child.node().is_selected())
        else {
            return false;
        };
        let mut group = LayerGroup::new(group_id);
        let (picked, kept): (Vec<Layer>, Vec<Layer>) = std::mem::take(&mut self.children)
            .into_iter()
            .partition(|child| child.node().is_selected());
        self.children = kept;
        group.children = picked;
        for child in &mut group.children {
            child.node_mut().set_selected(false);
        }
        group.selected = true;
        self.children.insert(insert_at, Layer::Group(group));
        true
    }

    /// Splices the children of every selected top-level group into its place.
    pub fn ungroup_selected(&mut self) -> bool {
        let mut changed = false;
        let mut flattened = Vec::with_capacity(self.children.len());
        for child in std::mem::take(&mut self.children) {
            match child {
                Layer::Group(group) if group.selected => {
                    flattened.extend(group.children);
                    changed = true;
                }
                other => flattened.push(other),
            }
        }
        self.children = flattened;
        changed
    }

    /// Drops the grid sub-state of every image below this group.
    pub(crate) fn truncate(&mut self) {
        for child in &mut self.children {
            match child {
                Layer::Image(image) => image.truncate(),
                Layer::Group(group) => group.truncate(),
            }
        }
    }

    pub(crate) fn set_children(&mut self, children: Vec<Layer>) {
        self.children = children;
    }

    pub(crate) fn set_composition(&mut self, mode: CompositionMode) {
        self.composition_mode = mode;
    }

    fn target_mut(&mut self, id: &str) -> Result<&mut dyn LayerNode> {
        if self.id == id {
            return Ok(self);
        }
        self.find_mut(id)
            .map(Layer::node_mut)
            .ok_or_else(|| LayerError::NotFound(id.to_string()))
    }

    fn first_loaded(&self) -> Option<&Layer> {
        self.children.iter().find(|child| !child.node().is_empty())
    }
}

impl LayerNode for LayerGroup {
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
        self.children.iter().all(|child| child.node().is_empty())
    }

    fn frame_count(&self, axis: AxisKind) -> usize {
        self.children
            .iter()
            .filter(|child| !child.node().is_empty())
            .map(|child| child.node().frame_count(axis))
            .max()
            .unwrap_or(1)
    }

    fn axis_types(&self) -> Vec<AxisKind> {
        let mut axes = Vec::new();
        for child in &self.children {
            for axis in child.node().axis_types() {
                if !axes.contains(&axis) {
                    axes.push(axis);
                }
            }
        }
        axes
    }

    fn display_axes(&self) -> Vec<AxisKind> {
        self.first_loaded()
            .map(|child| child.node().display_axes())
            .unwrap_or_default()
    }

    fn hidden_axes(&self) -> Vec<AxisKind> {
        let mut axes = Vec::new();
        for child in &self.children {
            for axis in child.node().hidden_axes() {
                if !axes.contains(&axis) {
                    axes.push(axis);
                }
            }
        }
        axes
    }

    fn is_descendant(&self, id: &str) -> bool {
        self.id == id || self.children.iter().any(|child| child.node().is_descendant(id))
    }

    fn layer_ids(&self) -> Vec<String> {
        let mut ids = vec![self.id.clone()];
        for child in &self.children {
            ids.extend(child.node().layer_ids());
        }
        ids
    }

    fn zoom(&self) -> f64 {
        self.first_loaded().map_or(1.0, |child| child.node().zoom())
    }

    fn set_zoom(&mut self, zoom: f64) {
        for child in &mut self.children {
            child.node_mut().set_zoom(zoom);
        }
    }

    fn reset_zoom(&mut self) {
        for child in &mut self.children {
            child.node_mut().reset_zoom();
        }
    }

    fn center_pixel(&self) -> Option<Point> {
        self.first_loaded().and_then(|child| child.node().center_pixel())
    }

    fn set_pan(&mut self, center: Point) {
        for child in &mut self.children {
            child.node_mut().set_pan(center);
        }
    }

    fn reset_pan(&mut self) {
        for child in &mut self.children {
            child.node_mut().reset_pan();
        }
    }

    fn image_pt(&self, screen: Point) -> Option<Point> {
        self.first_loaded().and_then(|child| child.node().image_pt(screen))
    }

    fn screen_to_image(&self, screen: Point) -> Option<Point> {
        self.first_loaded()
            .and_then(|child| child.node().screen_to_image(screen))
    }

    fn view_resize(&mut self, size: ViewSize) {
        for child in &mut self.children {
            child.node_mut().view_resize(size);
        }
    }

    fn grid_changed(&mut self, grid: &Value) {
        for child in &mut self.children {
            child.node_mut().grid_changed(grid);
        }
    }

    fn display_axes_changed(&mut self, axes: &[AxisKind], frames: &[usize]) {
        for child in &mut self.children {
            child.node_mut().display_axes_changed(axes, frames);
        }
    }

    fn load(&mut self, frames: &[usize], clip: ClipSettings) {
        for child in &mut self.children {
            child.node_mut().load(frames, clip);
        }
    }

    fn set_mask_color(&mut self, color: MaskColor) -> bool {
        let mut changed = false;
        for child in &mut self.children {
            changed |= child.node_mut().set_mask_color(color);
        }
        changed
    }

    fn set_mask_alpha(&mut self, alpha: u8) -> bool {
        let mut changed = false;
        for child in &mut self.children {
            changed |= child.node_mut().set_mask_alpha(alpha);
        }
        changed
    }
}
