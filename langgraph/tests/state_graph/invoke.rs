//! StateGraph invoke: single node, chains, plain-function nodes.

use std::sync::Arc;

use langgraph::{FnNode, StateGraph, END, START};

use crate::common::{TraceNode, TraceState};

#[tokio::test]
async fn invoke_single_node_between_start_and_end() {
    let mut graph = StateGraph::<TraceState>::new();
    graph
        .add_node("only", Arc::new(TraceNode::new("only")))
        .add_edge(START, "only")
        .add_edge("only", END);
    let compiled = graph.compile().expect("compile");

    let out = compiled.invoke(TraceState::default()).await.unwrap();
    assert_eq!(out.visited, vec!["only".to_string()]);
}

#[tokio::test]
async fn invoke_follows_edges_not_insertion_order() {
    let mut graph = StateGraph::<TraceState>::new();
    graph
        .add_node("b", Arc::new(TraceNode::new("b")))
        .add_node("a", Arc::new(TraceNode::new("a")))
        .add_edge("a", "b")
        .add_edge(START, "a")
        .add_edge("b", END);
    let compiled = graph.compile().expect("compile");

    assert_eq!(compiled.node_ids(), ["a".to_string(), "b".to_string()]);
    let out = compiled.invoke(TraceState::default()).await.unwrap();
    assert_eq!(out.visited, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn invoke_fn_node_and_reuse_compiled_graph() {
    let mut graph = StateGraph::<String>::new();
    graph
        .add_node("shout", Arc::new(FnNode::new("shout", |s: String| s.to_uppercase())))
        .add_edge(START, "shout")
        .add_edge("shout", END);
    let compiled = graph.compile().expect("compile");

    let first = compiled.invoke("hi".to_string()).await.unwrap();
    let second = compiled.invoke("hi".to_string()).await.unwrap();
    assert_eq!(first, "HI");
    assert_eq!(first, second);
}
