//! Error type for building and running the greeting graph.

use langgraph::{AgentError, CompilationError};
use thiserror::Error;

/// Errors surfaced by [`build`](crate::build), [`GreetingGraph`](crate::GreetingGraph) and the run helpers.
#[derive(Debug, Error)]
pub enum GreetingError {
    /// The input record lacks a required field (only `name` is required).
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The input record is present but malformed (not an object, `name` not text).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// JSON could not be parsed or produced.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Graph wiring was rejected at compile time.
    #[error(transparent)]
    Compile(#[from] CompilationError),

    /// A node failed while the graph was running.
    #[error(transparent)]
    Run(#[from] AgentError),

    /// `invoke_blocking` was called from inside an async runtime.
    #[error("invoke_blocking called from within an async runtime; use invoke instead")]
    NestedRuntime,

    /// The blocking runtime could not be created.
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}
