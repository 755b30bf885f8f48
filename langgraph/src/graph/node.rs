//! Node trait: one step of a state graph.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::AgentError;

use super::{Next, RunContext};

/// A named unit of work in a state graph: state in, state out.
///
/// Implementors return the updated state plus a [`Next`] telling the compiled
/// graph whether to follow the chain or stop. Registered via
/// `StateGraph::add_node(id, Arc::new(node))`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id used in logs and stream events.
    fn id(&self) -> &str;

    /// Runs one step.
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;

    /// Streaming-aware variant called by `CompiledStateGraph::stream`. Defaults to [`Node::run`].
    async fn run_with_context(
        &self,
        state: S,
        _ctx: &RunContext<S>,
    ) -> Result<(S, Next), AgentError> {
        self.run(state).await
    }
}
