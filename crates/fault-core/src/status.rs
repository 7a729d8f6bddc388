use std::error::Error;

use http::StatusCode;

use crate::fault::Fault;
use crate::kind::Kind;

/// HTTP status sent to clients for a given kind
///
/// Only the kinds listed here map to something other than
/// `500 Internal Server Error`. HTTP-aliased kinds are not mapped by value.
pub const fn status_for_kind(kind: Kind) -> StatusCode {
    match kind {
        Kind::HttpNoContent => StatusCode::NO_CONTENT,
        Kind::HttpBadRequest | Kind::InputError => StatusCode::BAD_REQUEST,
        Kind::HttpNotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// HTTP status for any error, `500` unless it is a [`Fault`]
pub fn http_status(err: &(dyn Error + 'static)) -> StatusCode {
    err.downcast_ref::<Fault>()
        .map_or(StatusCode::INTERNAL_SERVER_ERROR, Fault::status_code)
}

impl Fault {
    pub const fn status_code(&self) -> StatusCode {
        status_for_kind(self.kind())
    }
}
