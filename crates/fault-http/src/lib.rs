//! HTTP responses for faults
//!
//! Handlers return [`FaultResponse`] on failure; the conversion into an axum
//! response computes the status and error code and logs the rendered chain.

#![allow(clippy::must_use_candidate)]

mod responder;
mod response;

pub use responder::Responder;
pub use response::{ErrorResponse, FaultResponse};
