//! Node execution error types.
//!
//! Used by `Node::run` and returned from `CompiledStateGraph::invoke`.

use thiserror::Error;

/// Node execution error.
///
/// Returned by `Node::run` when a step fails, and by `CompiledStateGraph::invoke`
/// when the graph cannot run (e.g. empty graph). Errors from nodes propagate unchanged.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. empty graph, node failure).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
