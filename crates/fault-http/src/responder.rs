use fault_core::{Fault, Op, Service};

use crate::response::FaultResponse;

/// Turns faults into responses for the service owning this process
///
/// Created once at startup from configuration and shared with handlers,
/// typically as axum state.
#[derive(Debug, Clone, Copy)]
pub struct Responder {
    service: Service,
}

impl Responder {
    pub const fn new(service: Service) -> Self {
        Self { service }
    }

    pub const fn service(&self) -> Service {
        self.service
    }

    /// Rewrap `fault` with the handler's operation and prepare the response
    pub fn respond(&self, op: impl Into<Op>, fault: Fault) -> FaultResponse {
        FaultResponse::new(Fault::wrap(op, fault), self.service)
    }

    /// Prepare the response for a fault that already names the handler
    pub fn fault(&self, fault: Fault) -> FaultResponse {
        FaultResponse::new(fault, self.service)
    }
}

#[cfg(test)]
mod tests {
    use fault_core::{Expect, Kind};
    use http::StatusCode;

    use super::*;

    #[test]
    fn respond_rewraps_with_handler_op() {
        let responder = Responder::new(Service::Sheazuzu);
        let inner = Fault::builder().op("service: find").kind(Kind::InputError).build();

        let response = responder.respond("controller: get", inner);

        assert!(response.error().matches([Expect::op("controller: get"), Kind::InputError.into()]));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body().code, 1_000_002);
    }

    #[test]
    fn fault_keeps_the_fault_as_is() {
        let responder = Responder::new(Service::Sheazuzu);
        let response = responder.fault(Fault::builder().op("controller: upload").build());

        assert!(response.error().matches([Expect::op("controller: upload")]));
        assert_eq!(responder.service(), Service::Sheazuzu);
    }
}
