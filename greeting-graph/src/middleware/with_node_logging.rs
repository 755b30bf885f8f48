//! Extension trait for fluent API: attach node logging middleware then compile.

use std::sync::Arc;

use langgraph::StateGraph;

use super::logging::NodeLogging;
use crate::state::GreetingState;

/// Attach [`NodeLogging`] to a graph. Chain with `.compile()?`.
pub trait WithNodeLogging {
    fn with_node_logging(self) -> Self;
}

impl WithNodeLogging for StateGraph<GreetingState> {
    fn with_node_logging(self) -> Self {
        self.with_middleware(Arc::new(NodeLogging))
    }
}
