//! Node middleware for the greeting graph.
//!
//! Re-exports [`NodeLogging`] and [`WithNodeLogging`].

mod logging;
mod with_node_logging;

pub use logging::NodeLogging;
pub use with_node_logging::WithNodeLogging;
