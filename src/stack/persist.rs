use log::{debug, info};

use crate::events::StackEvent;
use crate::layer::{CompositionMode, Layer, LayerGroup};
use crate::model::{AxisKind, Selection, SkyCs, axis_purpose};
use crate::region::{Region, RegionFactory};
use crate::state::{StateError, StateTree, lookup};

use super::{Result, Stack};

pub const REGIONS: &str = "regions";
pub const LAYERS: &str = "layers";
pub const COMPOSITION_MODE: &str = "compositionMode";
pub const SKY_CS: &str = "skyCs";
pub const NEXT_LAYER_ID: &str = "nextLayerId";
pub const IMAGE: &str = "image";

impl Stack {
    /// Writes truncated layer state and stack settings, then flushes.
    pub(super) fn save_state(&mut self) -> Result<()> {
        write_layers(&mut self.state, &self.group, true)?;
        self.state
            .set_value(COMPOSITION_MODE, self.group.composition_mode())?;
        self.state.set_value(SKY_CS, self.cs)?;
        self.state.set_value(NEXT_LAYER_ID, self.next_layer_id)?;
        self.state.flush_state();
        Ok(())
    }

    pub(super) fn save_state_regions(&mut self) -> Result<()> {
        write_regions(&mut self.state, &self.regions)?;
        self.state.flush_state();
        Ok(())
    }

    /// Complete state: full layer sub-states, regions, and the image and
    /// axis selections keyed by axis purpose.
    pub fn state_string(&self) -> Result<String> {
        let mut copy = self.state.clone();
        write_layers(&mut copy, &self.group, false)?;
        write_regions(&mut copy, &self.regions)?;
        copy.set_value(IMAGE, self.image_selection().state_string())?;
        for (slot, axis) in AxisKind::KNOWN.into_iter().enumerate() {
            copy.set_value(
                axis_purpose(axis, self.cs),
                self.axis_selection(slot).state_string(),
            )?;
        }
        Ok(copy.to_string())
    }

    /// Replaces the whole stack with one produced by [`Stack::state_string`].
    /// Nothing changes when any part of `saved` is malformed.
    pub fn reset_stack(&mut self, saved: &str, factory: &dyn RegionFactory) -> Result<()> {
        let restored = StateTree::parse(saved)?;
        let mode = if restored.contains(COMPOSITION_MODE) {
            restored.get_value::<CompositionMode>(COMPOSITION_MODE)?
        } else {
            self.group.composition_mode()
        };
        let cs = if restored.contains(SKY_CS) {
            restored.get_value::<SkyCs>(SKY_CS)?
        } else {
            self.cs
        };
        let next_layer_id = if restored.contains(NEXT_LAYER_ID) {
            restored.get_value::<u64>(NEXT_LAYER_ID)?
        } else {
            1
        };

        let mut layers = Vec::with_capacity(restored.array_size(LAYERS));
        for index in 0..restored.array_size(LAYERS) {
            let key = lookup(LAYERS, index);
            let state = restored.get(&key).ok_or(StateError::MissingKey(key))?;
            layers.push(Layer::from_state(state)?);
        }

        let mut image = Selection::new();
        image.reset_state(&restored.get_value::<String>(IMAGE)?)?;
        let mut axes = Vec::with_capacity(AxisKind::KNOWN_COUNT);
        for axis in AxisKind::KNOWN {
            let purpose = axis_purpose(axis, cs);
            let mut selection = Selection::with_upper_bound(1);
            if restored.contains(purpose) {
                selection.reset_state(&restored.get_value::<String>(purpose)?)?;
            }
            axes.push(selection);
        }

        let mut regions = Vec::with_capacity(restored.array_size(REGIONS));
        for index in 0..restored.array_size(REGIONS) {
            let key = lookup(REGIONS, index);
            let state = restored.get(&key).ok_or(StateError::MissingKey(key))?;
            regions.push(factory.make_region(state)?);
        }

        self.group.set_composition(mode);
        self.group.set_children(layers);
        self.cs = cs;
        self.next_layer_id = next_layer_id;
        *self.image_selection_mut() = image;
        for (slot, selection) in axes.into_iter().enumerate() {
            *self.axis_selection_mut(slot) = selection;
        }
        self.regions = regions;
        self.refresh_bounds();
        info!(
            "restored stack with {} layer(s) and {} region(s)",
            self.group.len(),
            self.regions.len()
        );

        self.state = StateTree::new();
        self.save_state_regions()?;
        self.save_state()?;
        self.emit(StackEvent::ViewLoad);
        Ok(())
    }
}

fn write_layers(state: &mut StateTree, group: &LayerGroup, truncate: bool) -> Result<()> {
    let count = group.len();
    if state.array_size(LAYERS) != count || !state.contains(LAYERS) {
        state.resize_array(LAYERS, count)?;
    }
    for (index, layer) in group.children().iter().enumerate() {
        state.set_object(&lookup(LAYERS, index), layer.state(truncate)?)?;
    }
    debug!("wrote {count} layer state(s), truncate={truncate}");
    Ok(())
}

fn write_regions(state: &mut StateTree, regions: &[Region]) -> Result<()> {
    if state.array_size(REGIONS) != regions.len() || !state.contains(REGIONS) {
        state.resize_array(REGIONS, regions.len())?;
    }
    for (index, region) in regions.iter().enumerate() {
        state.set_object(&lookup(REGIONS, index), region.state()?)?;
    }
    Ok(())
}
