use std::error::Error;
use std::fmt::{self, Write};

use crate::fault::{Cause, Fault};

/// Separator written after every node, info and terminal message
pub const SEPARATOR: &str = "\n\t";

/// Render an error chain for logs
///
/// The outermost fault opens with `<SubService> <Kind>;` on its own line,
/// then every fault in the chain contributes its op and infos, and the
/// terminal error contributes its trimmed message. `None` renders as an
/// empty string; an error that is not a [`Fault`] renders as its message.
pub fn render(err: Option<&(dyn Error + 'static)>) -> String {
    let mut out = String::new();

    if let Some(err) = err {
        let written = match err.downcast_ref::<Fault>() {
            Some(fault) => write_fault(&mut out, fault),
            None => write_terminal(&mut out, err),
        };
        debug_assert!(written.is_ok(), "writing to a String cannot fail");
    }

    out
}

impl Fault {
    /// Render this fault and everything it wraps
    pub fn render(&self) -> String {
        self.to_string()
    }
}

pub(crate) fn write_fault(w: &mut impl Write, fault: &Fault) -> fmt::Result {
    writeln!(w, "{} {};", fault.sub_service(), fault.kind())?;
    write_chain(w, fault)
}

/// Ops, infos and the terminal message of every node, without the header
///
/// Walks the chain iteratively so arbitrarily deep chains cannot overflow the stack.
pub(crate) fn write_chain(w: &mut impl Write, fault: &Fault) -> fmt::Result {
    let mut node = fault;
    loop {
        write_node(w, node)?;

        match node.cause() {
            None => return Ok(()),
            Some(Cause::Fault(inner)) => node = &**inner,
            Some(Cause::Terminal(err)) => return write_terminal(w, &**err),
        }
    }
}

fn write_node(w: &mut impl Write, node: &Fault) -> fmt::Result {
    if let Some(op) = node.op() {
        w.write_str(op.as_str())?;
    }

    if !node.infos().is_empty() {
        w.write_str(" with:")?;
    }
    w.write_str(SEPARATOR)?;

    for info in node.infos() {
        write!(w, "\t{}: {}{SEPARATOR}", info.name, info.value)?;
    }

    Ok(())
}

fn write_terminal(w: &mut impl Write, err: &dyn Error) -> fmt::Result {
    write!(w, "{}{SEPARATOR}", err.to_string().trim())
}
