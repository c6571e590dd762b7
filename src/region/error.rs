use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegionError>;

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("malformed region state: {0}")]
    State(#[from] serde_json::Error),

    #[error("invalid region {id}: {reason}")]
    Invalid { id: String, reason: String },
}
