//! Data models for tool inputs and the TRAPI query graph.
//!
//! Upstream responses are not modelled; they are returned verbatim as
//! `serde_json::Value`.

mod inputs;
mod query_graph;

pub use inputs::{JobInput, LookupNameInput, NormalizeNodesInput, SubmitQueryInput, TrapiInput};
pub use query_graph::{
    EDGE, Message, OBJECT_NODE, QEdge, QNode, QueryGraph, SUBJECT_NODE, TrapiQuery,
    ensure_query_graph,
};
