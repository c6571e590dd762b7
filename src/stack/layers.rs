use std::path::Path;

use log::{debug, info, warn};

use crate::events::StackEvent;
use crate::formats::ImageLoader;
use crate::layer::{CompositionMode, ImageLayer, Layer, LayerGroup};
use crate::model::{AxisKind, MaskColor, validate_mask_alpha};
use crate::region::Region;

use super::{Result, Stack, StackError};

impl Stack {
    /// Loads `path`, appends it as a new image layer and makes it current.
    /// Returns the id of the new layer; nothing is added when loading fails.
    pub fn add_data_image(&mut self, path: impl AsRef<Path>, loader: &dyn ImageLoader) -> Result<String> {
        let path = path.as_ref();
        let meta = loader.load(path).inspect_err(|err| {
            warn!("could not add {}: {err}", path.display());
        })?;
        let id = self.allocate_id("image");
        let layer = ImageLayer::new(id.clone(), meta, self.draw.client_size());
        let index = self.group.push(Layer::Image(layer));
        info!("added image {id} from {}", path.display());

        let ordinal = self.group.children()[..index]
            .iter()
            .filter(|layer| layer.is_drawable())
            .count();
        self.reset_frames(ordinal);
        self.save_state()?;
        Ok(id)
    }

    pub fn add_group(&mut self) -> Result<String> {
        let id = self.allocate_id("group");
        self.group.push(Layer::Group(LayerGroup::new(id.clone())));
        debug!("added empty group {id}");
        self.save_state()?;
        Ok(id)
    }

    /// Removes the layer `id` wherever it sits. Returns `false` when no such
    /// layer exists.
    pub fn close_data(&mut self, id: &str) -> Result<bool> {
        if self.group.close_data(id).is_none() {
            return Ok(false);
        }
        info!("closed layer {id}");
        self.refresh_bounds();
        self.emit(StackEvent::ViewLoad);
        self.save_state()?;
        Ok(true)
    }

    pub fn add_data_regions(&mut self, regions: impl IntoIterator<Item = Region>) -> Result<()> {
        self.regions.extend(regions);
        self.save_state_regions()
    }

    /// Removes every region whose id starts with `id`.
    pub fn close_region(&mut self, id: &str) -> Result<()> {
        let before = self.regions.len();
        self.regions.retain(|region| !region.is_match(id));
        if self.regions.len() == before {
            return Err(StackError::RegionNotFound(id.to_string()));
        }
        debug!("closed {} region(s) matching {id}", before - self.regions.len());
        self.save_state_regions()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Moves every selected top-level layer one position towards the tail
    /// (`down`) or the head. Layers already at the end, and selected layers
    /// packed against them, stay put.
    pub fn move_selected_layers(&mut self, down: bool) -> Result<()> {
        let selected = self
            .group
            .children()
            .iter()
            .enumerate()
            .filter(|(_, layer)| layer.node().is_selected())
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        if selected.is_empty() {
            return Err(StackError::NothingSelected);
        }

        let children = self.group.children_mut();
        let count = children.len();
        let mut changed = false;
        let mut blocked: Option<usize> = None;
        if down {
            for &index in selected.iter().rev() {
                if index + 1 == count || blocked == Some(index + 1) {
                    blocked = Some(index);
                    continue;
                }
                children.swap(index, index + 1);
                changed = true;
            }
        } else {
            for &index in &selected {
                if index == 0 || blocked == Some(index - 1) {
                    blocked = Some(index);
                    continue;
                }
                children.swap(index, index - 1);
                changed = true;
            }
        }

        if !changed {
            if selected.len() == 1 {
                let err = if down {
                    StackError::AtBottom
                } else {
                    StackError::AtTop
                };
                warn!("{err}");
                return Err(err);
            }
            return Ok(());
        }
        self.refresh_bounds();
        self.emit(StackEvent::ViewLoad);
        self.save_state()
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) -> Result<bool> {
        if !self.group.set_layer_visible(id, visible)? {
            return Ok(false);
        }
        self.refresh_bounds();
        self.emit(StackEvent::ViewLoad);
        self.save_state()?;
        Ok(true)
    }

    /// Selects exactly the layers named in `ids`.
    pub fn set_selected(&mut self, ids: &[String]) -> Result<bool> {
        if !self.group.set_selected_ids(ids) {
            return Ok(false);
        }
        self.save_state()?;
        Ok(true)
    }

    pub fn set_layer_name(&mut self, id: &str, name: &str) -> Result<bool> {
        if !self.group.set_layer_name(id, name)? {
            return Ok(false);
        }
        self.save_state()?;
        Ok(true)
    }

    /// Groups the selected top-level layers, or ungroups the selected groups.
    pub fn set_layers_grouped(&mut self, grouped: bool) -> Result<bool> {
        let performed = if grouped {
            let id = self.allocate_id("group");
            self.group.group_selected(id)
        } else {
            self.group.ungroup_selected()
        };
        if !performed {
            return Ok(false);
        }
        self.view_resize();
        self.refresh_bounds();
        self.save_state()?;
        Ok(true)
    }

    pub fn set_composition_mode(&mut self, id: &str, mode: &str) -> Result<bool> {
        let recognized = CompositionMode::recognize(mode)
            .ok_or_else(|| StackError::UnknownCompositionMode(mode.to_string()))?;
        if !self.group.set_composition_mode(id, recognized)? {
            return Ok(false);
        }
        self.save_state()?;
        self.emit(StackEvent::ViewLoad);
        Ok(true)
    }

    /// Channels outside `[0, 255]` are all reported together and nothing
    /// changes.
    pub fn set_mask_color(&mut self, id: &str, red: i32, green: i32, blue: i32) -> Result<bool> {
        let color = MaskColor::validate(red, green, blue).map_err(StackError::InvalidMaskColor)?;
        if !self.group.set_layer_mask_color(id, color)? {
            return Ok(false);
        }
        self.save_state()?;
        self.emit(StackEvent::ViewLoad);
        Ok(true)
    }

    pub fn set_mask_alpha(&mut self, id: &str, alpha: i32) -> Result<bool> {
        let alpha = validate_mask_alpha(alpha).map_err(StackError::InvalidMaskAlpha)?;
        if !self.group.set_layer_mask_alpha(id, alpha)? {
            return Ok(false);
        }
        self.save_state()?;
        self.emit(StackEvent::ViewLoad);
        Ok(true)
    }

    pub fn current_id(&self) -> Option<String> {
        self.current_layer()
            .map(|layer| layer.node().id().to_string())
    }

    /// Ids of every layer below the root, depth first.
    pub fn layer_ids(&self) -> Vec<String> {
        self.group
            .children()
            .iter()
            .flat_map(|layer| layer.node().layer_ids())
            .collect()
    }

    /// Union of the non-display axes of all visible top-level layers.
    pub fn axes_hidden(&self) -> Vec<AxisKind> {
        let mut axes = Vec::new();
        for layer in self.group.children() {
            if !layer.node().is_visible() {
                continue;
            }
            for axis in layer.node().hidden_axes() {
                if !axes.contains(&axis) {
                    axes.push(axis);
                }
            }
        }
        axes
    }
}
