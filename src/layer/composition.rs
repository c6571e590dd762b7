use std::fmt;

use serde::{Deserialize, Serialize};

/// Rule for combining the visible children of a group into one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompositionMode {
    #[default]
    None,
    Alpha,
    Plus,
}

impl CompositionMode {
    pub const ALL: [CompositionMode; 3] = [
        CompositionMode::None,
        CompositionMode::Alpha,
        CompositionMode::Plus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CompositionMode::None => "None",
            CompositionMode::Alpha => "Alpha",
            CompositionMode::Plus => "Plus",
        }
    }

    /// Case-insensitive lookup of a mode by its label.
    pub fn recognize(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
