use std::error::Error;

use crate::fault::Fault;
use crate::service::Service;

/// Weight of the sub-service in the error code
pub const SUB_SERVICE_BAND: i32 = 1_000;

/// Weight of the owning service in the error code
pub const SERVICE_BAND: i32 = 1_000_000;

/// Error code presented to clients
///
/// Encodes kind, sub-service and owning service in fixed decimal bands:
/// `kind + sub_service * 1_000 + service * 1_000_000`. Errors that are not a
/// [`Fault`] have code `0`.
pub fn code(err: &(dyn Error + 'static), service: Service) -> i32 {
    err.downcast_ref::<Fault>().map_or(0, |fault| fault.code(service))
}

impl Fault {
    /// Error code of this fault for the given owning service
    pub fn code(&self, service: Service) -> i32 {
        i32::from(self.kind().code())
            + i32::from(self.sub_service().code()) * SUB_SERVICE_BAND
            + i32::from(service.code()) * SERVICE_BAND
    }
}
