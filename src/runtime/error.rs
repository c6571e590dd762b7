use crate::config::ConfigError;
use crate::formats::IoError;
use crate::session::SessionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("image service error: {0}")]
    Io(#[from] IoError),

    #[error("session service error: {0}")]
    Session(#[from] SessionError),
}
