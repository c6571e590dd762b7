use thiserror::Error;

pub type Result<T> = std::result::Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state serialization failure: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("state root must be an object")]
    NotAnObject,

    #[error("state has no value at `{0}`")]
    MissingKey(String),

    #[error("state value at `{0}` is not an array")]
    NotAnArray(String),
}
