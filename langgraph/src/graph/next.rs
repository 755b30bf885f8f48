//! Routing decision returned by a node together with the updated state.

/// What the compiled graph does after a node returns.
///
/// Only linear routing is supported: follow the chain or stop early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Next {
    /// Run the next node in edge order, or finish if this was the last one.
    Continue,
    /// Stop now and return the current state.
    End,
}
