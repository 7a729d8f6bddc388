use serde::Deserialize;
use strum::Display;

/// Top-level service owning the process
///
/// Exactly one value is active per process. It is read from configuration at
/// startup and handed to whatever computes error codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Service {
    #[default]
    Unspecified = 0,
    Sheazuzu = 1,
}

impl Service {
    /// Numeric value used in the millions band of the error code
    pub const fn code(self) -> u8 {
        self as u8
    }
}
