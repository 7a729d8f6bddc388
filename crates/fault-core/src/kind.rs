use strum::{Display, EnumIter};

/// Failure category, the primary classification axis of a [`Fault`](crate::Fault)
///
/// The `Http*` values at the end share their numeric value with the HTTP
/// status code they are named after. That value is what ends up in the
/// units/hundreds band of the error code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u16)]
pub enum Kind {
    /// Unclassified failure
    #[default]
    #[strum(to_string = "Error")]
    Other = 0,
    #[strum(to_string = "Mapping Error")]
    MappingError = 1,
    #[strum(to_string = "Input Error")]
    InputError = 2,
    #[strum(to_string = "Settings Error")]
    SettingsError = 3,
    #[strum(to_string = "Error")]
    DatabaseError = 4,
    /// An upstream answered `200 OK` without a body
    #[strum(to_string = "Empty Okapi Response Error")]
    HttpEmptyOkResponse = 5,
    #[strum(to_string = "HTTP-Client Error")]
    HttpClientError = 6,

    #[strum(to_string = "HTTP No Content Error")]
    HttpNoContent = 204,
    #[strum(to_string = "HTTP Bad Request Error")]
    HttpBadRequest = 400,
    #[strum(to_string = "HTTP Forbidden Error")]
    HttpForbidden = 403,
    #[strum(to_string = "HTTP Not Found Error")]
    HttpNotFound = 404,
    #[strum(to_string = "HTTP Internal Server Error")]
    HttpInternal = 500,
    #[strum(to_string = "HTTP Service Unavailable Error")]
    HttpUnavailable = 503,
}

impl Kind {
    /// Numeric value used in the error code
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Classify an upstream HTTP status
    ///
    /// Returns the HTTP-aliased kind with the same value, or [`Kind::Other`]
    /// for statuses that have no dedicated kind.
    pub const fn from_status_code(status: u16) -> Self {
        match status {
            204 => Self::HttpNoContent,
            400 => Self::HttpBadRequest,
            403 => Self::HttpForbidden,
            404 => Self::HttpNotFound,
            500 => Self::HttpInternal,
            503 => Self::HttpUnavailable,
            _ => Self::Other,
        }
    }
}

/// Internal subsystem a failure originates from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum SubService {
    #[default]
    #[strum(to_string = "")]
    Unspecified = 0,
    /// Relational match-data store
    #[strum(to_string = "ATB")]
    Atb = 1,
    #[strum(to_string = "REDIS")]
    Redis = 2,
}

impl SubService {
    /// Numeric value used in the thousands band of the error code
    pub const fn code(self) -> u8 {
        self as u8
    }
}
