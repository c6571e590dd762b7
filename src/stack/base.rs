use std::sync::mpsc::Receiver;

use log::debug;

use crate::config::StackConfig;
use crate::events::{EventBus, StackEvent};
use crate::layer::{Layer, LayerGroup};
use crate::model::{AxisKind, Selection, SkyCs};
use crate::region::Region;
use crate::registry::{Handle, Registry};
use crate::render::DrawSynchronizer;
use crate::state::StateTree;

use super::Result;

const ROOT_ID: &str = "stack";

/// Ordered layers plus the image and per-axis frame selections over them.
///
/// The current image is an ordinal into the visible, non-empty top-level
/// layers; every axis selection is bounded by the frame count of that layer.
pub struct Stack {
    pub(super) group: LayerGroup,
    pub(super) selections: Registry<Selection>,
    pub(super) image_select: Handle<Selection>,
    pub(super) axis_selects: Vec<Handle<Selection>>,
    pub(super) regions: Vec<Region>,
    pub(super) state: StateTree,
    pub(super) cs: SkyCs,
    pub(super) draw: Box<dyn DrawSynchronizer>,
    pub(super) events: EventBus,
    pub(super) config: StackConfig,
    pub(super) next_layer_id: u64,
}

impl Stack {
    pub fn new(config: StackConfig, draw: Box<dyn DrawSynchronizer>) -> Result<Self> {
        let mut selections = Registry::new();
        let image_select = selections.create(Selection::new());
        let axis_selects = AxisKind::KNOWN
            .iter()
            .map(|_| selections.create(Selection::with_upper_bound(1)))
            .collect();
        let mut group = LayerGroup::new(ROOT_ID);
        group.set_composition(config.composition_mode);

        let mut stack = Self {
            group,
            selections,
            image_select,
            axis_selects,
            regions: Vec::new(),
            state: StateTree::new(),
            cs: config.sky_cs,
            draw,
            events: EventBus::new(),
            config,
            next_layer_id: 1,
        };
        stack.save_state_regions()?;
        stack.save_state()?;
        Ok(stack)
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn group(&self) -> &LayerGroup {
        &self.group
    }

    pub fn layers(&self) -> &[Layer] {
        self.group.children()
    }

    pub fn coordinate_system(&self) -> SkyCs {
        self.cs
    }

    /// Persisted state as of the last flush.
    pub fn state(&self) -> &StateTree {
        &self.state
    }

    pub fn subscribe(&mut self) -> Receiver<StackEvent> {
        self.events.subscribe()
    }

    pub(super) fn image_selection(&self) -> &Selection {
        &self.selections[self.image_select]
    }

    pub(super) fn image_selection_mut(&mut self) -> &mut Selection {
        &mut self.selections[self.image_select]
    }

    pub(super) fn axis_selection(&self, slot: usize) -> &Selection {
        &self.selections[self.axis_selects[slot]]
    }

    pub(super) fn axis_selection_mut(&mut self, slot: usize) -> &mut Selection {
        let handle = self.axis_selects[slot];
        &mut self.selections[handle]
    }

    pub(super) fn visible_count(&self) -> usize {
        self.group.visible_count()
    }

    pub(super) fn current_layer(&self) -> Option<&Layer> {
        self.index_current()
            .and_then(|index| self.group.children().get(index))
    }

    pub(super) fn current_layer_mut(&mut self) -> Option<&mut Layer> {
        let index = self.index_current()?;
        self.group.children_mut().get_mut(index)
    }

    /// Top-level layers an operation applies to: all of them, or only the
    /// current one.
    pub(super) fn targets_mut(&mut self, all: bool) -> Vec<&mut Layer> {
        if all {
            return self.group.children_mut().iter_mut().collect();
        }
        self.current_layer_mut().into_iter().collect()
    }

    pub(super) fn allocate_id(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{prefix}{}", self.next_layer_id);
            self.next_layer_id += 1;
            if self.group.find(&id).is_none() {
                return id;
            }
        }
    }

    /// Recomputes the image bound and every axis bound from the current
    /// layer. Axes whose frame had to be clamped report a frame change.
    pub(super) fn refresh_bounds(&mut self) {
        let visible = self.visible_count();
        self.image_selection_mut().set_upper_bound(visible);
        self.refresh_axis_bounds();
    }

    pub(super) fn refresh_axis_bounds(&mut self) {
        for (slot, axis) in AxisKind::KNOWN.into_iter().enumerate() {
            let frames = self
                .current_layer()
                .map_or(1, |layer| layer.node().frame_count(axis));
            if self.axis_selection_mut(slot).set_upper_bound(frames) {
                debug!("{axis} frame clamped to bound {frames}");
                self.emit(StackEvent::FrameChanged(axis));
            }
        }
    }

    pub(super) fn emit(&mut self, event: StackEvent) {
        self.events.emit(event);
    }
}

impl Drop for Stack {
    fn drop(&mut self) {
        self.selections.destroy(self.image_select);
        for handle in self.axis_selects.drain(..) {
            self.selections.destroy(handle);
        }
    }
}
