use std::path::Path;

use crate::config::StackConfig;
use crate::render::PreviewSaveService;
use crate::session::{SessionReport, SessionScript, load_script, run_session, save_report};

use super::{ImageService, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct SessionService {
    images: ImageService,
    saver: PreviewSaveService,
}

impl SessionService {
    pub fn load_script(&self, path: impl AsRef<Path>) -> Result<SessionScript> {
        Ok(load_script(path)?)
    }

    pub fn run(&self, script: &SessionScript, config: &StackConfig) -> Result<SessionReport> {
        Ok(run_session(script, config, self.images.loader(), &self.saver)?)
    }

    pub fn save_report(&self, path: impl AsRef<Path>, report: &SessionReport) -> Result<()> {
        save_report(path, report)?;
        Ok(())
    }
}
