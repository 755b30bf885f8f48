//! greeting-graph: a single-node greeting workflow on top of `langgraph`.
//!
//! The graph is `START → greeting_node → END`; the node maps `{name}` to
//! `{name, greeting}` with greeting `"Hello, {name}! Welcome!"`.
//!
//! ## Usage
//!
//! ```rust
//! # #[tokio::main]
//! # async fn main() -> Result<(), greeting_graph::GreetingError> {
//! let graph = greeting_graph::build()?;
//! let out = graph.invoke(greeting_graph::GreetingState::new("Alice")).await?;
//! assert_eq!(out.greeting, "Hello, Alice! Welcome!");
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod graph;
pub mod logging;
mod middleware;
mod node;
mod run;
mod state;

pub use config::{RunConfig, RunOptions, DEFAULT_NAME};
pub use error::GreetingError;
pub use graph::{build, build_with_config, GreetingGraph};
pub use middleware::{NodeLogging, WithNodeLogging};
pub use node::{format_greeting, greeting_node, GREETING_NODE};
pub use run::{render, run, run_with_config, run_with_options};
pub use state::GreetingState;

#[cfg(test)]
mod tests;
