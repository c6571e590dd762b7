mod axis;
mod color;
mod error;
mod geometry;
mod metadata;
mod selection;

#[cfg(test)]
mod tests;

pub use axis::{AxisKind, SkyCs, axis_purpose, default_axis_for_index};
pub use color::{MaskColor, validate_mask_alpha};
pub use error::{CoreError, Result};
pub use geometry::{Point, ViewSize};
pub use metadata::{Dim, ImageMeta};
pub use selection::Selection;
