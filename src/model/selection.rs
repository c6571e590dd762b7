use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Result;

/// Bounded cursor: `index` always lies in `0..upper_bound`, or is 0 when the
/// bound is 0. Mutators report whether the index moved so owners can notify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    index: usize,
    upper_bound: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upper_bound(upper_bound: usize) -> Self {
        Self {
            index: 0,
            upper_bound,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    /// Returns `true` when the index had to be clamped to the new bound.
    pub fn set_upper_bound(&mut self, upper_bound: usize) -> bool {
        self.upper_bound = upper_bound;
        let clamped = self.clamp(self.index);
        if clamped != self.index {
            self.index = clamped;
            return true;
        }
        false
    }

    /// Returns `true` when the stored index changed.
    pub fn set_index(&mut self, index: usize) -> bool {
        let index = self.clamp(index);
        if index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    pub fn state_string(&self) -> String {
        json!({"index": self.index, "upperBound": self.upper_bound}).to_string()
    }

    pub fn reset_state(&mut self, state: &str) -> Result<()> {
        let restored: Selection = serde_json::from_str(state)?;
        self.upper_bound = restored.upper_bound;
        self.index = self.clamp(restored.index);
        Ok(())
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.upper_bound.saturating_sub(1))
    }
}
