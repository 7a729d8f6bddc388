//! Structured errors shared by every service layer
//!
//! A [`Fault`] records one failure occurrence: the operation that produced
//! or rewrapped it, its classification ([`Kind`], [`SubService`]), diagnostic
//! [`Info`] entries, and the cause it wraps. Faults are built at the failure
//! site, rewrapped at each layer boundary, and consumed at the outer boundary
//! to produce an error code, an HTTP status and a log rendering.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod code;
mod error;
mod fault;
mod info;
mod kind;
mod matcher;
mod render;
mod service;
mod status;

pub use code::{SERVICE_BAND, SUB_SERVICE_BAND, code};
pub use error::HttpError;
pub use fault::{Cause, Fault, FaultBuilder, FaultContext, Message, Op};
pub use info::{Info, InfoValue, ProvideInfo};
pub use kind::{Kind, SubService};
pub use matcher::{Expect, matches};
pub use render::{SEPARATOR, render};
pub use service::Service;
pub use status::{http_status, status_for_kind};
