use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayerError>;

#[derive(Debug, Error)]
pub enum LayerError {
    #[error("Could not find layer: {0}")]
    NotFound(String),

    #[error("Composition mode can only be set on a layer group: {0}")]
    NotAGroup(String),

    #[error("malformed layer state: {0}")]
    State(#[from] serde_json::Error),

    #[error("invalid image metadata: {0}")]
    Core(#[from] CoreError),
}
