//! Shared state and nodes for StateGraph integration tests.

use async_trait::async_trait;
use langgraph::{AgentError, Next, Node};

/// Record state: a list of visited node ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceState {
    pub visited: Vec<String>,
}

/// Node that appends its own id to `TraceState::visited`.
pub struct TraceNode {
    id: String,
}

impl TraceNode {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

#[async_trait]
impl Node<TraceState> for TraceNode {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, state: TraceState) -> Result<(TraceState, Next), AgentError> {
        let mut visited = state.visited;
        visited.push(self.id.clone());
        Ok((TraceState { visited }, Next::Continue))
    }
}
