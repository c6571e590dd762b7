use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("unsupported image layout: {0}")]
    UnsupportedLayout(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode/encode failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("TIFF decode failure: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("image header parse failure: {0}")]
    HeaderJson(#[from] serde_json::Error),

    #[error("image header parse failure: {0}")]
    HeaderYaml(#[from] serde_yaml::Error),

    #[error("invalid image metadata: {0}")]
    Core(#[from] CoreError),
}
