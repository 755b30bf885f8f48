//! State graph: nodes + explicit edges (from → to).
//!
//! Add nodes with `add_node`, define the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit, then `compile` to get a
//! `CompiledStateGraph`.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;
use crate::graph::node_middleware::NodeMiddleware;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph: nodes plus explicit edges. No conditional edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge(from, to)` (use
/// `START` and `END` for entry/exit), then `compile()` to obtain an executable graph.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Edges (from_id, to_id). Compiled graph derives linear execution order from these.
    edges: Vec<(String, String)>,
    /// Middleware attached via `with_middleware`; `compile_with_middleware` overrides it.
    middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            middleware: None,
        }
    }

    /// Attaches node middleware for the fluent `graph.with_middleware(m).compile()` form.
    pub fn with_middleware(self, middleware: Arc<dyn NodeMiddleware<S>>) -> Self {
        Self {
            middleware: Some(middleware),
            ..self
        }
    }

    /// Adds a node; replaces any node already registered under the same id.
    ///
    /// Returns `&mut Self` for method chaining. Use `add_edge` to include it in the chain.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge from `from_id` to `to_id`.
    ///
    /// Use `START` for graph entry and `END` for graph exit. Both ids (except
    /// START/END) must be registered via `add_node` before `compile()`.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Builds the executable graph: validates that all edge node ids exist and
    /// edges form a single linear chain from START to END.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        let middleware = self.middleware.clone();
        self.compile_internal(middleware)
    }

    /// Builds the executable graph with node middleware wrapping each node run.
    pub fn compile_with_middleware(
        self,
        middleware: Arc<dyn NodeMiddleware<S>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(Some(middleware))
    }

    fn compile_internal(
        self,
        middleware: Option<Arc<dyn NodeMiddleware<S>>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }

        let first = match self.single(|(f, _)| f == START, |(_, t)| t) {
            Some(id) => id,
            None => return Err(CompilationError::MissingStart),
        };
        let expected_last = match self.single(|(_, t)| t == END, |(f, _)| f) {
            Some(id) => id,
            None => return Err(CompilationError::MissingEnd),
        };

        let froms: Vec<&String> = self
            .edges
            .iter()
            .filter(|(f, _)| f != START)
            .map(|(f, _)| f)
            .collect();
        let tos: Vec<&String> = self
            .edges
            .iter()
            .filter(|(_, t)| t != END)
            .map(|(_, t)| t)
            .collect();
        if froms.iter().collect::<HashSet<_>>().len() != froms.len() {
            return Err(CompilationError::InvalidChain("duplicate from (branch)".into()));
        }
        if tos.iter().collect::<HashSet<_>>().len() != tos.len() {
            return Err(CompilationError::InvalidChain(
                "duplicate to (merge or branch)".into(),
            ));
        }

        let next_map: HashMap<&str, &str> = self
            .edges
            .iter()
            .filter(|(f, _)| f != START)
            .map(|(f, t)| (f.as_str(), t.as_str()))
            .collect();

        let mut edge_order = vec![first.clone()];
        let mut visited: HashSet<String> = HashSet::from([first.clone()]);
        let mut current = first;
        loop {
            let next = match next_map.get(current.as_str()) {
                Some(n) => n.to_string(),
                None => {
                    return Err(CompilationError::InvalidChain(format!(
                        "node '{}' has no outgoing edge",
                        current
                    )))
                }
            };
            if next == END {
                if current != expected_last {
                    return Err(CompilationError::InvalidChain(
                        "chain tail does not match the single edge to END".into(),
                    ));
                }
                break;
            }
            if !visited.insert(next.clone()) {
                return Err(CompilationError::InvalidChain("cycle detected".into()));
            }
            edge_order.push(next.clone());
            current = next;
        }

        if edge_order.len() != next_map.len() {
            return Err(CompilationError::InvalidChain(
                "edges not reachable from START".into(),
            ));
        }

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            edge_order,
            middleware,
        })
    }

    /// Returns the one endpoint selected by `pick` among edges satisfying `matches`,
    /// or `None` when there are zero or several.
    fn single(
        &self,
        matches: impl Fn(&(String, String)) -> bool,
        pick: impl Fn(&(String, String)) -> &String,
    ) -> Option<String> {
        let mut matching = self.edges.iter().filter(|e| matches(*e));
        match (matching.next(), matching.next()) {
            (Some(edge), None) => Some(pick(edge).clone()),
            _ => None,
        }
    }
}
