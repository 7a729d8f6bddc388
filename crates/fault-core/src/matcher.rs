use std::error::Error;

use crate::fault::{Fault, Op};
use crate::kind::{Kind, SubService};
use crate::render::write_chain;

/// One property a [`Fault`] is expected to have
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expect {
    Op(Op),
    SubService(SubService),
    Kind(Kind),
    /// Some op, info or terminal message in the chain contains this text
    ///
    /// The classification header is not searched, so `Error` does not match
    /// every fault; use [`Expect::Kind`] for that.
    Message(String),
}

impl Expect {
    pub fn op(op: impl Into<Op>) -> Self {
        Self::Op(op.into())
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    fn holds_for(&self, fault: &Fault) -> bool {
        match self {
            Self::Op(op) => fault.op() == Some(op),
            Self::SubService(sub_service) => fault.sub_service() == *sub_service,
            Self::Kind(kind) => fault.kind() == *kind,
            Self::Message(text) => {
                let mut body = String::new();
                write_chain(&mut body, fault).is_ok() && body.contains(text.as_str())
            }
        }
    }
}

impl From<Op> for Expect {
    fn from(op: Op) -> Self {
        Self::Op(op)
    }
}

impl From<SubService> for Expect {
    fn from(sub_service: SubService) -> Self {
        Self::SubService(sub_service)
    }
}

impl From<Kind> for Expect {
    fn from(kind: Kind) -> Self {
        Self::Kind(kind)
    }
}

/// Whether `err` is a [`Fault`] satisfying every expectation
///
/// Op, sub-service and kind are compared against the outermost fault only;
/// the wrapped chain is consulted solely for [`Expect::Message`].
pub fn matches(err: &(dyn Error + 'static), expectations: impl IntoIterator<Item = Expect>) -> bool {
    err.downcast_ref::<Fault>()
        .is_some_and(|fault| fault.matches(expectations))
}

impl Fault {
    pub fn matches(&self, expectations: impl IntoIterator<Item = Expect>) -> bool {
        expectations.into_iter().all(|expect| expect.holds_for(self))
    }
}
