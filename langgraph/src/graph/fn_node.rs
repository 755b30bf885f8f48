//! Adapter that turns a plain `Fn(S) -> S` into a graph node.

use std::fmt::Debug;
use std::marker::PhantomData;

use async_trait::async_trait;

use crate::error::AgentError;

use super::{Next, Node};

/// Node backed by a pure function. Always returns [`Next::Continue`].
///
/// Lets callers register an ordinary function the way LangGraph registers a
/// Python callable with `add_node`.
pub struct FnNode<S, F> {
    id: String,
    f: F,
    _state: PhantomData<fn(S) -> S>,
}

impl<S, F> FnNode<S, F>
where
    F: Fn(S) -> S + Send + Sync + 'static,
{
    /// Creates a node with the given id that applies `f` to the incoming state.
    pub fn new(id: impl Into<String>, f: F) -> Self {
        Self {
            id: id.into(),
            f,
            _state: PhantomData,
        }
    }
}

#[async_trait]
impl<S, F> Node<S> for FnNode<S, F>
where
    S: Clone + Send + Sync + Debug + 'static,
    F: Fn(S) -> S + Send + Sync + 'static,
{
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, state: S) -> Result<(S, Next), AgentError> {
        Ok(((self.f)(state), Next::Continue))
    }
}
