use http::StatusCode;

use crate::fault::Fault;
use crate::service::Service;

/// Errors that can be turned into an HTTP error response
///
/// The HTTP layer builds its responses from this trait so it never needs
/// to know how an error classifies itself.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Numeric code exposed in the response body
    fn error_code(&self, service: Service) -> i32;

    /// Human readable classification, e.g. `ATB HTTP Not Found Error`
    fn label(&self) -> String;
}

impl HttpError for Fault {
    fn status_code(&self) -> StatusCode {
        Self::status_code(self)
    }

    fn error_code(&self, service: Service) -> i32 {
        self.code(service)
    }

    fn label(&self) -> String {
        let kind = self.kind().to_string();
        let sub_service = self.sub_service().to_string();

        if sub_service.is_empty() {
            kind
        } else {
            format!("{sub_service} {kind}")
        }
    }
}
