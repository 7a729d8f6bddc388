use fault_core::Service;
use serde::Deserialize;

/// Settings consumed when faults are turned into error codes
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Service owning this process, the millions band of every error code
    #[serde(default)]
    pub service: Service,
}
