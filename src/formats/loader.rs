use std::path::Path;

use crate::model::ImageMeta;

use super::util::extension;
use super::{Result, read_image_meta, supported_formats};

/// Source of image layers: resolves a file name to the image's shape.
pub trait ImageLoader {
    fn supports_extension(&self, extension: &str) -> bool;
    fn load(&self, path: &Path) -> Result<ImageMeta>;

    fn supports(&self, path: &Path) -> bool {
        extension(path).is_ok_and(|ext| self.supports_extension(&ext))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultImageLoader;

impl ImageLoader for DefaultImageLoader {
    fn supports_extension(&self, extension: &str) -> bool {
        supported_formats().contains(&extension)
    }

    fn load(&self, path: &Path) -> Result<ImageMeta> {
        read_image_meta(path)
    }
}
