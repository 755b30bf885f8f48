//! Node middleware: compile_with_middleware and with_middleware().compile().

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use langgraph::{AgentError, Next, NodeMiddleware, NodeRunFuture, StateGraph, END, START};

use crate::common::{TraceNode, TraceState};

/// Middleware that records every node id it wraps.
#[derive(Default)]
struct RecordingMiddleware {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl NodeMiddleware<TraceState> for RecordingMiddleware {
    async fn around_run(
        &self,
        node_id: &str,
        state: TraceState,
        inner: Box<dyn FnOnce(TraceState) -> NodeRunFuture<TraceState> + Send>,
    ) -> Result<(TraceState, Next), AgentError> {
        self.seen.lock().unwrap().push(node_id.to_string());
        inner(state).await
    }
}

fn two_node_graph() -> StateGraph<TraceState> {
    let mut graph = StateGraph::<TraceState>::new();
    graph
        .add_node("a", Arc::new(TraceNode::new("a")))
        .add_node("b", Arc::new(TraceNode::new("b")))
        .add_edge(START, "a")
        .add_edge("a", "b")
        .add_edge("b", END);
    graph
}

#[tokio::test]
async fn compile_with_middleware_wraps_every_node() {
    let middleware = Arc::new(RecordingMiddleware::default());
    let compiled = two_node_graph()
        .compile_with_middleware(middleware.clone())
        .expect("compile");

    let out = compiled.invoke(TraceState::default()).await.unwrap();
    assert_eq!(out.visited, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(*middleware.seen.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn with_middleware_then_compile_wraps_every_node() {
    let middleware = Arc::new(RecordingMiddleware::default());
    let compiled = two_node_graph()
        .with_middleware(middleware.clone())
        .compile()
        .expect("compile");

    compiled.invoke(TraceState::default()).await.unwrap();
    assert_eq!(middleware.seen.lock().unwrap().len(), 2);
}
