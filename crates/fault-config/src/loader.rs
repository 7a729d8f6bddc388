use std::path::Path;

use fault_core::Service;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::from_toml_str(&raw)?;

        tracing::debug!(
            config_path = %path.display(),
            service = %config.errors.service,
            "configuration loaded"
        );

        Ok(config)
    }

    /// Parse and validate configuration held in memory
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable expansion, TOML parsing or
    /// validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if no owning service is configured
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.errors.service == Service::Unspecified {
            anyhow::bail!("errors.service must name the service owning this process");
        }

        Ok(())
    }
}
