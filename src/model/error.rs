use thiserror::Error;

use super::AxisKind;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("an image needs at least two dimensions, found {0}")]
    TooFewDimensions(usize),

    #[error("invalid dimension size 0 at axis {axis}")]
    ZeroSizedDimension { axis: usize },

    #[error("axis {0} appears more than once")]
    DuplicateAxis(AxisKind),

    #[error("unknown axis type: {0}")]
    UnknownAxis(String),

    #[error("unknown sky coordinate system: {0}")]
    UnknownCoordinateSystem(String),

    #[error("malformed selection state: {0}")]
    SelectionState(#[from] serde_json::Error),
}
