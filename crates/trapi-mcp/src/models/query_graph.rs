//! TRAPI query graph construction.
//!
//! Only the query side of a TRAPI message is modelled. Upstream responses
//! (knowledge graph, results) are passed through as raw JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TrapiInput;
use crate::error::{ToolError, ToolResult};

/// Node key for the subject of a one-hop query.
pub const SUBJECT_NODE: &str = "n0";

/// Node key for the object of a one-hop query.
pub const OBJECT_NODE: &str = "n1";

/// Edge key for the single edge of a one-hop query.
pub const EDGE: &str = "e0";

/// A query node. A node with neither `ids` nor `categories` is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl QNode {
    /// Build a node, omitting empty fields entirely.
    #[must_use]
    pub fn new(id: &str, categories: Option<&[String]>) -> Self {
        Self {
            ids: (!id.is_empty()).then(|| vec![id.to_string()]),
            categories: non_empty(categories),
        }
    }

    /// True when the node constrains nothing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.ids.is_none() && self.categories.is_none()
    }
}

/// A query edge between two node keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QEdge {
    pub subject: String,
    pub object: String,
    pub predicates: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifiers: Option<Vec<Value>>,
}

/// The node/edge pattern being asked about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryGraph {
    pub nodes: BTreeMap<String, QNode>,
    pub edges: BTreeMap<String, QEdge>,
}

/// `message` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub query_graph: QueryGraph,
}

/// Top-level TRAPI query as POSTed to the ARS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapiQuery {
    pub message: Message,
}

impl TrapiQuery {
    /// Build a single-edge query `n0 -[e0]-> n1` from flat tool arguments.
    ///
    /// An empty subject or object produces an open node. Empty optional
    /// lists are left out of the output rather than sent as `[]`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the predicate is empty.
    pub fn one_hop(input: &TrapiInput) -> ToolResult<Self> {
        if input.predicate.trim().is_empty() {
            return Err(ToolError::validation("predicate", "cannot be empty"));
        }

        let mut nodes = BTreeMap::new();
        nodes.insert(
            SUBJECT_NODE.to_string(),
            QNode::new(&input.subject, input.subject_categories.as_deref()),
        );
        nodes.insert(
            OBJECT_NODE.to_string(),
            QNode::new(&input.object, input.object_categories.as_deref()),
        );

        let edge = QEdge {
            subject: SUBJECT_NODE.to_string(),
            object: OBJECT_NODE.to_string(),
            predicates: vec![input.predicate.clone()],
            attributes: non_empty(input.attributes.as_deref()),
            qualifiers: non_empty(input.qualifiers.as_deref()),
        };

        let mut edges = BTreeMap::new();
        edges.insert(EDGE.to_string(), edge);

        Ok(Self { message: Message { query_graph: QueryGraph { nodes, edges } } })
    }

    /// Serialize to the JSON body sent upstream.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_value(&self) -> ToolResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Check that a caller-supplied message has `message.query_graph`.
///
/// Node/edge cross-references are not checked; the ARS reports those.
///
/// # Errors
///
/// Returns [`ToolError::InvalidQuery`] naming the first missing key.
pub fn ensure_query_graph(query: &Value) -> ToolResult<()> {
    let message = query.get("message").ok_or_else(|| ToolError::invalid_query("message"))?;

    if message.get("query_graph").is_none() {
        return Err(ToolError::invalid_query("message.query_graph"));
    }

    Ok(())
}

fn non_empty<T: Clone>(items: Option<&[T]>) -> Option<Vec<T>> {
    items.filter(|v| !v.is_empty()).map(<[T]>::to_vec)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn input(subject: &str, object: &str, predicate: &str) -> TrapiInput {
        TrapiInput {
            subject: subject.to_string(),
            object: object.to_string(),
            predicate: predicate.to_string(),
            ..TrapiInput::default()
        }
    }

    #[test]
    fn test_one_hop_shape() {
        let query =
            TrapiQuery::one_hop(&input("CHEBI:6801", "MONDO:0005148", "biolink:treats")).unwrap();
        let qg = &query.message.query_graph;

        assert_eq!(qg.nodes.len(), 2);
        assert_eq!(qg.edges.len(), 1);
        let edge = &qg.edges[EDGE];
        assert_eq!(edge.subject, SUBJECT_NODE);
        assert_eq!(edge.object, OBJECT_NODE);
        assert_eq!(edge.predicates, vec!["biolink:treats".to_string()]);
        assert_eq!(qg.nodes[SUBJECT_NODE].ids, Some(vec!["CHEBI:6801".to_string()]));
    }

    #[test]
    fn test_empty_object_is_open_node() {
        let query = TrapiQuery::one_hop(&input("MONDO:0021117", "", "biolink:related_to")).unwrap();
        let value = query.to_value().unwrap();
        let n1 = &value["message"]["query_graph"]["nodes"]["n1"];

        assert_eq!(n1, &json!({}));
        assert!(query.message.query_graph.nodes[OBJECT_NODE].is_open());
    }

    #[test]
    fn test_optional_edge_fields_omitted() {
        let mut args = input("A:1", "B:2", "biolink:related_to");
        args.attributes = Some(vec![]);
        args.qualifiers = None;
        let value = TrapiQuery::one_hop(&args).unwrap().to_value().unwrap();
        let edge = value["message"]["query_graph"]["edges"]["e0"].as_object().unwrap();

        assert!(!edge.contains_key("attributes"));
        assert!(!edge.contains_key("qualifiers"));
    }

    #[test]
    fn test_optional_edge_fields_attached() {
        let mut args = input("A:1", "B:2", "biolink:related_to");
        args.attributes = Some(vec![json!({"attribute_type_id": "biolink:knowledge_level"})]);
        args.qualifiers = Some(vec![json!({
            "qualifier_type_id": "biolink:object_aspect_qualifier",
            "qualifier_value": "activity"
        })]);
        let value = TrapiQuery::one_hop(&args).unwrap().to_value().unwrap();
        let edge = &value["message"]["query_graph"]["edges"]["e0"];

        assert_eq!(edge["attributes"][0]["attribute_type_id"], "biolink:knowledge_level");
        assert_eq!(edge["qualifiers"][0]["qualifier_value"], "activity");
    }

    #[test]
    fn test_categories_only_when_non_empty() {
        let mut args = input("", "", "biolink:related_to");
        args.subject_categories = Some(vec!["biolink:Gene".to_string()]);
        args.object_categories = Some(vec![]);
        let query = TrapiQuery::one_hop(&args).unwrap();
        let nodes = &query.message.query_graph.nodes;

        assert_eq!(nodes[SUBJECT_NODE].categories, Some(vec!["biolink:Gene".to_string()]));
        assert!(nodes[SUBJECT_NODE].ids.is_none());
        assert!(nodes[OBJECT_NODE].is_open());
    }

    #[test]
    fn test_empty_predicate_rejected() {
        let err = TrapiQuery::one_hop(&input("A:1", "B:2", "  ")).unwrap_err();
        assert!(matches!(err, ToolError::Validation { ref field, .. } if field == "predicate"));
    }

    #[test]
    fn test_padded_predicate_forwarded_verbatim() {
        let query = TrapiQuery::one_hop(&input("A:1", "B:2", " biolink:treats ")).unwrap();
        let edge = &query.message.query_graph.edges[EDGE];
        assert_eq!(edge.predicates, vec![" biolink:treats ".to_string()]);
    }

    #[test]
    fn test_ensure_query_graph() {
        assert!(ensure_query_graph(&json!({"message": {"query_graph": {}}})).is_ok());

        let err = ensure_query_graph(&json!({"query_graph": {}})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidQuery { ref missing } if missing == "message"));

        let err = ensure_query_graph(&json!({"message": {"knowledge_graph": {}}})).unwrap_err();
        assert!(matches!(
            err,
            ToolError::InvalidQuery { ref missing } if missing == "message.query_graph"
        ));
    }

    #[test]
    fn test_ensure_query_graph_non_object_message() {
        let err = ensure_query_graph(&json!({"message": "hello"})).unwrap_err();
        assert!(matches!(
            err,
            ToolError::InvalidQuery { ref missing } if missing == "message.query_graph"
        ));
    }
}
