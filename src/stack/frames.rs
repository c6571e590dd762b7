use log::debug;

use crate::events::StackEvent;
use crate::model::AxisKind;

use super::Stack;

impl Stack {
    /// Frame of `axis`, or `None` when the current image has no such axis.
    pub fn frame(&self, axis: AxisKind) -> Option<usize> {
        let slot = axis.slot()?;
        let layer = self.current_layer()?;
        layer
            .node()
            .axis_types()
            .contains(&axis)
            .then(|| self.axis_selection(slot).index())
    }

    /// Frame of every known axis, in slot order.
    pub fn frame_indices(&self) -> Vec<usize> {
        (0..self.axis_selects.len())
            .map(|slot| self.axis_selection(slot).index())
            .collect()
    }

    pub fn frame_upper_bound(&self, axis: AxisKind) -> usize {
        axis.slot()
            .map_or(0, |slot| self.axis_selection(slot).upper_bound())
    }

    /// Moves the frame of `axis`; the value is clamped to the axis bound.
    /// Returns whether the frame changed.
    pub fn set_frame_axis(&mut self, value: usize, axis: AxisKind) -> bool {
        let Some(slot) = axis.slot() else {
            return false;
        };
        if !self.axis_selection_mut(slot).set_index(value) {
            return false;
        }
        if self.index_current().is_some() {
            debug!("{axis} frame set to {}", self.axis_selection(slot).index());
            self.emit(StackEvent::FrameChanged(axis));
            self.emit(StackEvent::ViewLoad);
        }
        true
    }

    /// Makes the `value`-th visible layer current. Returns its id when the
    /// current image changed.
    pub fn set_frame_image(&mut self, value: usize) -> Option<String> {
        if self.image_selection().index() == value {
            return None;
        }
        self.reset_frames(value)
    }

    pub(super) fn reset_frames(&mut self, ordinal: usize) -> Option<String> {
        let visible = self.visible_count();
        if ordinal >= visible {
            return None;
        }
        self.image_selection_mut().set_upper_bound(visible);
        if self.image_selection_mut().set_index(ordinal) {
            self.emit(StackEvent::ViewLoad);
        }
        self.refresh_axis_bounds();
        self.current_id()
    }

    /// Position in the stack of the current image.
    pub fn index_current(&self) -> Option<usize> {
        let ordinal = self.image_selection().index();
        self.group
            .drawable()
            .nth(ordinal)
            .map(|(index, _)| index)
    }

    /// Position of the top-level layer that is, or contains, `layer_id`.
    pub fn index(&self, layer_id: &str) -> Option<usize> {
        self.group
            .children()
            .iter()
            .position(|layer| layer.node().is_descendant(layer_id))
    }

    /// Current image ordinal, `None` when no layer is visible.
    pub fn select_image_index(&self) -> Option<usize> {
        (self.visible_count() > 0).then(|| self.image_selection().index())
    }

    /// Slice of the current image: `None` for the displayed axes, the
    /// selected frame for every other axis.
    pub fn image_slice(&self) -> Vec<Option<usize>> {
        let Some(layer) = self.current_layer() else {
            return Vec::new();
        };
        let display = layer.node().display_axes();
        layer
            .node()
            .axis_types()
            .into_iter()
            .map(|axis| {
                if display.contains(&axis) {
                    None
                } else {
                    self.frame(axis)
                }
            })
            .collect()
    }
}
