use std::error::Error;
use std::fmt;

use crate::info::{Info, ProvideInfo};
use crate::kind::{Kind, SubService};

/// Operation in which a fault was created or through which it was rewrapped
///
/// Should concisely describe what the caller was trying to achieve, e.g.
/// `service: find match data by id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Op(String);

impl Op {
    pub fn new(op: impl Into<String>) -> Self {
        Self(op.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Op {
    fn from(op: &str) -> Self {
        Self::new(op)
    }
}

impl From<String> for Op {
    fn from(op: String) -> Self {
        Self(op)
    }
}

/// Plain text failure used as the end of a cause chain
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

/// What a [`Fault`] wraps
#[derive(Debug)]
pub enum Cause {
    /// Another fault, the chain continues
    Fault(Box<Fault>),
    /// Any other error, the chain ends here
    Terminal(Box<dyn Error + Send + Sync + 'static>),
}

impl From<Fault> for Cause {
    fn from(fault: Fault) -> Self {
        Self::Fault(Box::new(fault))
    }
}

/// One failure occurrence plus the cause it wraps
///
/// Faults are immutable once built. Crossing a layer boundary consumes the
/// inner fault and produces a new outer one, which by default inherits the
/// inner classification.
#[derive(Debug, Default)]
pub struct Fault {
    op: Option<Op>,
    kind: Kind,
    sub_service: SubService,
    cause: Option<Cause>,
    infos: Vec<Info>,
}

impl Fault {
    pub fn builder() -> FaultBuilder {
        FaultBuilder::default()
    }

    /// Fault of the given kind without operation or cause
    pub fn new(kind: Kind) -> Self {
        Self::builder().kind(kind).build()
    }

    /// Unclassified fault wrapping a plain text message
    pub fn message(text: impl Into<String>) -> Self {
        Self::builder().message(text).build()
    }

    /// Rewrap `inner` at a layer boundary, inheriting its classification
    pub fn wrap(op: impl Into<Op>, inner: Self) -> Self {
        Self::builder().op(op).wrap(inner).build()
    }

    pub const fn op(&self) -> Option<&Op> {
        self.op.as_ref()
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }

    pub const fn sub_service(&self) -> SubService {
        self.sub_service
    }

    pub const fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Diagnostics attached at this node, in insertion order
    pub fn infos(&self) -> &[Info] {
        &self.infos
    }

    /// This fault followed by every fault it wraps, outermost first
    pub fn chain(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |fault| match Self::cause(fault) {
            Some(Cause::Fault(inner)) => Some(inner.as_ref()),
            _ => None,
        })
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.cause.as_ref()? {
            Cause::Fault(inner) => Some(&**inner),
            Cause::Terminal(err) => Some(&**err),
        }
    }
}

// Unlinks the chain node by node; the derived drop would recurse once per layer
impl Drop for Fault {
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(Cause::Fault(mut inner)) = next {
            next = inner.cause.take();
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::render::write_fault(f, self)
    }
}

/// Builds a [`Fault`] one concept at a time
///
/// `op`, `kind` and `sub_service` are last-write-wins in call order, and
/// [`wrap`](Self::wrap) counts as a write of both classification fields.
/// Infos accumulate.
#[derive(Debug, Default)]
#[must_use]
pub struct FaultBuilder {
    fault: Fault,
}

impl FaultBuilder {
    pub fn op(mut self, op: impl Into<Op>) -> Self {
        self.fault.op = Some(op.into());
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.fault.kind = kind;
        self
    }

    pub fn sub_service(mut self, sub_service: SubService) -> Self {
        self.fault.sub_service = sub_service;
        self
    }

    /// Wrap a prior fault, inheriting its kind and sub-service
    pub fn wrap(mut self, inner: Fault) -> Self {
        self.fault.kind = inner.kind;
        self.fault.sub_service = inner.sub_service;
        self.fault.cause = Some(inner.into());
        self
    }

    /// Wrap any error
    ///
    /// A [`Fault`] passed here is treated exactly like [`wrap`](Self::wrap).
    pub fn source<E>(self, err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.boxed_source(Box::new(err))
    }

    /// Wrap an already boxed error
    pub fn boxed_source(mut self, err: Box<dyn Error + Send + Sync + 'static>) -> Self {
        match err.downcast::<Fault>() {
            Ok(inner) => self.wrap(*inner),
            Err(err) => {
                self.fault.cause = Some(Cause::Terminal(err));
                self
            }
        }
    }

    /// Wrap a plain text message as the terminal cause
    pub fn message(self, text: impl Into<String>) -> Self {
        self.boxed_source(Box::new(Message::new(text)))
    }

    pub fn info(mut self, info: impl Into<Info>) -> Self {
        self.fault.infos.push(info.into());
        self
    }

    pub fn infos(mut self, infos: impl IntoIterator<Item = Info>) -> Self {
        self.fault.infos.extend(infos);
        self
    }

    /// Attach the info produced by `provider`
    pub fn provided(self, provider: &impl ProvideInfo) -> Self {
        self.info(provider.error_info())
    }

    pub fn build(self) -> Fault {
        self.fault
    }
}

/// Rewrap the error of a `Result` at a layer boundary
pub trait FaultContext<T> {
    fn with_op(self, op: impl Into<Op>) -> Result<T, Fault>;
}

impl<T> FaultContext<T> for Result<T, Fault> {
    fn with_op(self, op: impl Into<Op>) -> Self {
        self.map_err(|inner| Fault::wrap(op, inner))
    }
}
