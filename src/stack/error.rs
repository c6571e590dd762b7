use thiserror::Error;

use crate::formats::IoError;
use crate::layer::LayerError;
use crate::model::CoreError;
use crate::region::RegionError;
use crate::state::StateError;

pub type Result<T> = std::result::Result<T, StackError>;

#[derive(Debug, Error)]
pub enum StackError {
    #[error("Could not find region to remove for id={0}")]
    RegionNotFound(String),

    #[error("Please make sure at least one, non-internal layer is selected.")]
    NothingSelected,

    #[error("The last image in the stack can not be moved down any further.")]
    AtBottom,

    #[error("The first image in the stack can not be moved up any further.")]
    AtTop,

    #[error("Unrecognized layer composition mode: {0}")]
    UnknownCompositionMode(String),

    #[error("{}", .0.join("\n"))]
    InvalidMaskColor(Vec<String>),

    #[error("{0}")]
    InvalidMaskAlpha(String),

    #[error("Image was not saved.  Please check the file name.")]
    SaveNotStarted,

    #[error("could not load image: {0}")]
    Load(#[from] IoError),

    #[error(transparent)]
    Layer(#[from] LayerError),

    #[error(transparent)]
    Region(#[from] RegionError),

    #[error("stack state failure: {0}")]
    State(#[from] StateError),

    #[error("stack state failure: {0}")]
    Selection(#[from] CoreError),
}
