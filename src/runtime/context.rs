use std::path::Path;

use crate::config::{StackConfig, load_config};

use super::{ImageService, Result, SessionService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    config: StackConfig,
    image_service: ImageService,
    session_service: SessionService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with settings read from a JSON or YAML config file.
    pub fn with_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            config: load_config(path)?,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn image_service(&self) -> &ImageService {
        &self.image_service
    }

    pub fn session_service(&self) -> &SessionService {
        &self.session_service
    }
}
