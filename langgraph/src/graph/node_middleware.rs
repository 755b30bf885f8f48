//! Middleware wrapped around every node run of a compiled graph.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use crate::error::AgentError;

use super::Next;

/// Boxed future produced by the inner node run handed to [`NodeMiddleware::around_run`].
pub type NodeRunFuture<S> = Pin<Box<dyn Future<Output = Result<(S, Next), AgentError>> + Send>>;

/// Wraps each `Node::run` call. Attach with `StateGraph::with_middleware` or
/// `StateGraph::compile_with_middleware`.
///
/// Implementations must call `inner(state)` to actually run the node, and may
/// inspect or log around it.
#[async_trait]
pub trait NodeMiddleware<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    async fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: Box<dyn FnOnce(S) -> NodeRunFuture<S> + Send>,
    ) -> Result<(S, Next), AgentError>;
}
