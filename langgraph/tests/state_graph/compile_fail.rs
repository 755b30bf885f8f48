//! StateGraph compile failure cases: unknown node, missing START/END, invalid chain.

use std::sync::Arc;

use langgraph::{CompilationError, StateGraph, END, START};

use crate::common::{TraceNode, TraceState};

fn graph_with(ids: &[&str]) -> StateGraph<TraceState> {
    let mut graph = StateGraph::<TraceState>::new();
    for id in ids {
        graph.add_node(*id, Arc::new(TraceNode::new(id)));
    }
    graph
}

#[test]
fn compile_fails_when_edge_refers_to_unknown_node() {
    let mut graph = graph_with(&["a"]);
    graph.add_edge(START, "a").add_edge("a", "missing");

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("expected NodeNotFound, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_without_edge_from_start() {
    let mut graph = graph_with(&["a"]);
    graph.add_edge("a", END);

    assert_eq!(graph.compile().err(), Some(CompilationError::MissingStart));
}

#[test]
fn compile_fails_with_two_edges_from_start() {
    let mut graph = graph_with(&["a", "b"]);
    graph
        .add_edge(START, "a")
        .add_edge(START, "b")
        .add_edge("a", END);

    assert_eq!(graph.compile().err(), Some(CompilationError::MissingStart));
}

#[test]
fn compile_fails_without_edge_to_end() {
    let mut graph = graph_with(&["a"]);
    graph.add_edge(START, "a");

    assert_eq!(graph.compile().err(), Some(CompilationError::MissingEnd));
}

#[test]
fn compile_fails_with_two_edges_to_end() {
    let mut graph = graph_with(&["a", "b"]);
    graph
        .add_edge(START, "a")
        .add_edge("a", END)
        .add_edge("b", END);

    assert_eq!(graph.compile().err(), Some(CompilationError::MissingEnd));
}

#[test]
fn compile_fails_on_branch() {
    let mut graph = graph_with(&["a", "b", "c"]);
    graph
        .add_edge(START, "a")
        .add_edge("a", "b")
        .add_edge("a", "c")
        .add_edge("c", END);

    assert!(matches!(
        graph.compile(),
        Err(CompilationError::InvalidChain(_))
    ));
}

#[test]
fn compile_fails_on_cycle() {
    let mut graph = graph_with(&["a", "b", "c"]);
    graph
        .add_edge(START, "a")
        .add_edge("a", "b")
        .add_edge("b", "a")
        .add_edge("c", END);

    assert!(matches!(
        graph.compile(),
        Err(CompilationError::InvalidChain(_))
    ));
}

#[test]
fn compile_fails_on_disconnected_tail() {
    let mut graph = graph_with(&["a", "b"]);
    graph.add_edge(START, "a").add_edge("b", END);

    assert!(matches!(
        graph.compile(),
        Err(CompilationError::InvalidChain(_))
    ));
}
