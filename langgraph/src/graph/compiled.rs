//! Compiled state graph: immutable, supports invoke and stream.
//!
//! Built by `StateGraph::compile`. Holds nodes, the edge order derived from the
//! explicit edges at compile time, and optional node middleware.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::AgentError;
use crate::stream::{StreamEvent, StreamMode};

use super::logging;
use super::node_middleware::{NodeMiddleware, NodeRunFuture};
use super::{Next, Node, RunContext};

/// Compiled graph: immutable structure, supports invoke and stream.
///
/// Created by `StateGraph::compile()`. Runs from the first node in edge order and
/// uses each node's returned `Next` to continue or stop. Cheap to clone; clones
/// share the same nodes.
#[derive(Clone)]
pub struct CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    pub(super) edge_order: Vec<String>,
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node ids in execution order (START and END excluded).
    pub fn node_ids(&self) -> &[String] {
        &self.edge_order
    }

    async fn run_node(
        &self,
        node_id: &str,
        state: S,
        run_ctx: Option<&RunContext<S>>,
    ) -> Result<(S, Next), AgentError> {
        let node = self
            .nodes
            .get(node_id)
            .cloned()
            .ok_or_else(|| AgentError::ExecutionFailed(format!("node not found: {}", node_id)))?;

        match &self.middleware {
            Some(middleware) => {
                let run_ctx_owned = run_ctx.cloned();
                let inner: Box<dyn FnOnce(S) -> NodeRunFuture<S> + Send> =
                    Box::new(move |s: S| -> NodeRunFuture<S> {
                        Box::pin(async move {
                            match run_ctx_owned.as_ref() {
                                Some(ctx) => node.run_with_context(s, ctx).await,
                                None => node.run(s).await,
                            }
                        })
                    });
                middleware.around_run(node_id, state, inner).await
            }
            None => match run_ctx {
                Some(ctx) => node.run_with_context(state, ctx).await,
                None => node.run(state).await,
            },
        }
    }

    /// Shared run loop used by invoke() and stream(): steps through nodes until completion.
    async fn run_loop_inner(
        &self,
        state: &mut S,
        run_ctx: Option<&RunContext<S>>,
    ) -> Result<(), AgentError> {
        let mut pos = 0;
        while let Some(current_id) = self.edge_order.get(pos) {
            logging::log_node_start(current_id);
            let (new_state, next) = self.run_node(current_id, state.clone(), run_ctx).await?;
            logging::log_node_complete(current_id, &next);
            *state = new_state;

            if let Some(ctx) = run_ctx {
                if let Some(tx) = &ctx.stream_tx {
                    if ctx.stream_mode.contains(&StreamMode::Values) {
                        let _ = tx.send(StreamEvent::Values(state.clone())).await;
                    }
                    if ctx.stream_mode.contains(&StreamMode::Updates) {
                        let _ = tx
                            .send(StreamEvent::Updates {
                                node_id: current_id.clone(),
                                state: state.clone(),
                            })
                            .await;
                    }
                }
            }

            match next {
                Next::End => break,
                Next::Continue => pos += 1,
            }
        }
        Ok(())
    }

    /// Runs the graph with the given state and returns the final state.
    ///
    /// Starts at the first node in edge order; after each node, `Next::Continue`
    /// runs the next node (or finishes after the last) and `Next::End` stops.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        if self.edge_order.is_empty() {
            return Err(AgentError::ExecutionFailed("empty graph".into()));
        }
        logging::log_graph_start(self.edge_order.len());

        let mut state = state;
        match self.run_loop_inner(&mut state, None).await {
            Ok(()) => {
                logging::log_graph_complete();
                Ok(state)
            }
            Err(e) => {
                logging::log_graph_error(&e);
                Err(e)
            }
        }
    }

    /// Streams graph execution, emitting events via channel-backed Stream.
    ///
    /// The run is spawned on the current tokio runtime; the stream ends when the run
    /// finishes. Errors end the stream early.
    pub fn stream(
        &self,
        state: S,
        stream_mode: impl Into<HashSet<StreamMode>>,
    ) -> ReceiverStream<StreamEvent<S>> {
        let (tx, rx) = mpsc::channel(128);
        let graph = self.clone();
        let run_ctx = RunContext {
            stream_tx: Some(tx),
            stream_mode: stream_mode.into(),
        };

        tokio::spawn(async move {
            if graph.edge_order.is_empty() {
                return;
            }
            let mut state = state;
            if let Err(e) = graph.run_loop_inner(&mut state, Some(&run_ctx)).await {
                logging::log_graph_error(&e);
            }
        });

        ReceiverStream::new(rx)
    }
}
