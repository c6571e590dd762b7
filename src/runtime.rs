mod context;
mod error;
mod image_service;
mod session_service;

pub use context::AppContext;
pub use error::{AppError, Result};
pub use image_service::ImageService;
pub use session_service::SessionService;
