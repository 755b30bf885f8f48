//! # LangGraph for Rust
//!
//! A minimal, LangGraph-inspired graph runtime in Rust. One shared state type flows
//! through nodes with a simple **state-in, state-out** design: no separate Input/Output
//! types.
//!
//! ## Design Principles
//!
//! - **Single state type**: Each graph uses one state struct that all nodes read from and
//!   write to.
//! - **One step per `Node::run`**: receive state, return updated state plus a [`Next`].
//! - **Linear chains**: nodes are wired with `add_edge(from, to)` between [`START`] and
//!   [`END`]; `compile` rejects branches, merges and cycles.
//!
//! ## Main Modules
//!
//! - [`graph`]: `StateGraph`, `CompiledStateGraph`, `Node`, `FnNode`, `Next`, `NodeMiddleware`.
//! - [`stream`]: `StreamMode` / `StreamEvent` emitted by `CompiledStateGraph::stream`.
//! - [`error`]: `AgentError` returned by node runs.
//!
//! ## Features
//!
//! - `tracing` (default): graph and node events go through the `tracing` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use langgraph::{FnNode, StateGraph, END, START};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut graph = StateGraph::<i32>::new();
//! graph
//!     .add_node("double", Arc::new(FnNode::new("double", |n: i32| n * 2)))
//!     .add_edge(START, "double")
//!     .add_edge("double", END);
//! let compiled = graph.compile().unwrap();
//! assert_eq!(compiled.invoke(21).await.unwrap(), 42);
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod stream;

pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, FnNode, Next, Node, NodeMiddleware, NodeRunFuture,
    RunContext, StateGraph, END, START,
};
pub use stream::{StreamEvent, StreamMode};
