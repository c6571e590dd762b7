use std::path::Path;

use crate::formats::{DefaultImageLoader, ImageLoader};
use crate::model::ImageMeta;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageService {
    loader: DefaultImageLoader,
}

impl ImageService {
    pub fn read_meta(&self, path: impl AsRef<Path>) -> Result<ImageMeta> {
        Ok(self.loader.load(path.as_ref())?)
    }

    pub fn loader(&self) -> &dyn ImageLoader {
        &self.loader
    }
}
