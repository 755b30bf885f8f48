//! Logging utilities for graph execution.
//!
//! Emits graph and node lifecycle events through `tracing` when the `tracing`
//! feature is enabled, and plain stderr lines otherwise.

/// Log node execution start.
pub fn log_node_start(node_id: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(node_id = node_id, "Starting node execution");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Starting node execution: {}", node_id);
}

/// Log node execution completion.
pub fn log_node_complete(node_id: &str, next: &crate::graph::Next) {
    #[cfg(feature = "tracing")]
    tracing::debug!(node_id = node_id, ?next, "Node execution complete");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Node execution complete: {} -> {:?}", node_id, next);
}

/// Log graph execution start.
pub fn log_graph_start(node_count: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(node_count, "Starting graph execution");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Starting graph execution: {} node(s)", node_count);
}

/// Log graph execution completion.
pub fn log_graph_complete() {
    #[cfg(feature = "tracing")]
    tracing::debug!("Graph execution complete");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Graph execution complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &crate::error::AgentError) {
    #[cfg(feature = "tracing")]
    tracing::error!(%error, "Graph execution error");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[ERROR] Graph execution error: {}", error);
}
