#![allow(clippy::must_use_candidate)]

mod env;
pub mod errors;
mod loader;
pub mod logging;

use serde::Deserialize;

pub use errors::ErrorsConfig;
pub use logging::{LogFormat, LogLevel, LoggingConfig};

/// Top-level configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Error classification settings
    #[serde(default)]
    pub errors: ErrorsConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
