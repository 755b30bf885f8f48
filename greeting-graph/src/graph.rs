//! Greeting workflow: build the `START → greeting_node → END` graph and run it.

use std::collections::HashSet;
use std::sync::Arc;

use langgraph::{CompiledStateGraph, FnNode, StateGraph, StreamEvent, StreamMode, END, START};
use serde_json::Value;
use tokio_stream::wrappers::ReceiverStream;

use crate::config::RunConfig;
use crate::error::GreetingError;
use crate::middleware::WithNodeLogging;
use crate::node::{greeting_node, GREETING_NODE};
use crate::state::GreetingState;

/// Executable greeting workflow returned by [`build`].
///
/// Immutable and cheap to clone; every invoke is independent.
#[derive(Clone)]
pub struct GreetingGraph {
    compiled: CompiledStateGraph<GreetingState>,
}

/// Builds the greeting workflow with default config (no node logging).
pub fn build() -> Result<GreetingGraph, GreetingError> {
    build_with_config(&RunConfig::default())
}

/// Builds the greeting workflow; attaches [`NodeLogging`](crate::NodeLogging) when `config.verbose`.
pub fn build_with_config(config: &RunConfig) -> Result<GreetingGraph, GreetingError> {
    let mut graph = StateGraph::<GreetingState>::new();
    graph
        .add_node(GREETING_NODE, Arc::new(FnNode::new(GREETING_NODE, greeting_node)))
        .add_edge(START, GREETING_NODE)
        .add_edge(GREETING_NODE, END);

    let compiled = if config.verbose {
        graph.with_node_logging().compile()?
    } else {
        graph.compile()?
    };
    Ok(GreetingGraph { compiled })
}

impl GreetingGraph {
    /// Runs the workflow once and returns the final state.
    pub async fn invoke(&self, state: GreetingState) -> Result<GreetingState, GreetingError> {
        Ok(self.compiled.invoke(state).await?)
    }

    /// Synchronous [`invoke`](Self::invoke) for callers outside an async runtime.
    ///
    /// Returns [`GreetingError::NestedRuntime`] when called from within a tokio runtime.
    pub fn invoke_blocking(&self, state: GreetingState) -> Result<GreetingState, GreetingError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(GreetingError::NestedRuntime);
        }
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        runtime.block_on(self.invoke(state))
    }

    /// Validates an untyped input record, runs the workflow and returns the output record.
    pub async fn invoke_json(&self, input: Value) -> Result<Value, GreetingError> {
        let state = GreetingState::from_value(input)?;
        let out = self.invoke(state).await?;
        Ok(serde_json::to_value(out)?)
    }

    /// Streams `Values` and `Updates` events for the single node run.
    pub fn stream(&self, state: GreetingState) -> ReceiverStream<StreamEvent<GreetingState>> {
        self.compiled
            .stream(state, HashSet::from([StreamMode::Values, StreamMode::Updates]))
    }

    /// Node ids in execution order; always `[GREETING_NODE]`.
    pub fn node_ids(&self) -> &[String] {
        self.compiled.node_ids()
    }
}
