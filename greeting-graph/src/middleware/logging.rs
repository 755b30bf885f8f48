//! Logging middleware that records node enter/exit around each node run.

use async_trait::async_trait;
use langgraph::{AgentError, Next, NodeMiddleware, NodeRunFuture};

use crate::state::GreetingState;

/// Middleware that logs node enter/exit around each node run via `tracing`.
///
/// Events go to whatever subscriber is installed; the binary writes them to stderr so
/// the greeting on stdout stays clean.
pub struct NodeLogging;

#[async_trait]
impl NodeMiddleware<GreetingState> for NodeLogging {
    async fn around_run(
        &self,
        node_id: &str,
        state: GreetingState,
        inner: Box<dyn FnOnce(GreetingState) -> NodeRunFuture<GreetingState> + Send>,
    ) -> Result<(GreetingState, Next), AgentError> {
        tracing::debug!(node = node_id, name = %state.name, "enter node");
        let result = inner(state).await;
        match &result {
            Ok((out, next)) => {
                tracing::debug!(node = node_id, ?next, greeting = %out.greeting, "exit node")
            }
            Err(e) => tracing::debug!(node = node_id, error = %e, "exit node with error"),
        }
        result
    }
}
