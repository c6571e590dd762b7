mod api;
mod error;
mod header;
mod loader;
mod raster;
mod tiff;
mod util;

#[cfg(test)]
mod tests;

pub use api::{read_image_meta, supported_formats};
pub use error::{IoError, Result};
pub use loader::{DefaultImageLoader, ImageLoader};
