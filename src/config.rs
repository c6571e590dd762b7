mod error;
mod io;
mod settings;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, Result};
pub use io::load_config;
pub use settings::{SaveSettings, StackConfig};
