//! Property-based tests for the one-hop query builder.

use proptest::prelude::*;
use serde_json::json;
use trapi_mcp::models::{EDGE, OBJECT_NODE, SUBJECT_NODE, TrapiInput, TrapiQuery};

/// CURIE-like identifier or empty string for an open node.
fn arb_curie_or_empty() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Z]{2,8}:[0-9]{1,8}"]
}

fn arb_list(element: &'static str) -> impl Strategy<Value = Option<Vec<String>>> {
    proptest::option::of(proptest::collection::vec(element, 0..3))
}

fn arb_trapi_input() -> impl Strategy<Value = TrapiInput> {
    (
        arb_curie_or_empty(),
        arb_curie_or_empty(),
        "biolink:[a-z_]{3,30}",
        arb_list("biolink:[A-Z][a-zA-Z]{2,20}"),
        arb_list("biolink:[A-Z][a-zA-Z]{2,20}"),
        proptest::option::of(proptest::collection::vec(any::<u8>(), 0..3)),
    )
        .prop_map(|(subject, object, predicate, subject_categories, object_categories, attrs)| {
            TrapiInput {
                subject,
                object,
                predicate,
                attributes: attrs.map(|v| {
                    v.into_iter()
                        .map(|n| json!({"attribute_type_id": "biolink:p", "value": n}))
                        .collect()
                }),
                qualifiers: None,
                subject_categories,
                object_categories,
            }
        })
}

proptest! {
    /// Exactly two nodes and one edge, wired n0 -> n1.
    #[test]
    fn one_hop_has_two_nodes_one_edge(input in arb_trapi_input()) {
        let query = TrapiQuery::one_hop(&input).unwrap();
        let qg = &query.message.query_graph;

        prop_assert_eq!(qg.nodes.len(), 2);
        prop_assert_eq!(qg.edges.len(), 1);
        let edge = &qg.edges[EDGE];
        prop_assert!(qg.nodes.contains_key(&edge.subject));
        prop_assert!(qg.nodes.contains_key(&edge.object));
        prop_assert_eq!(edge.subject.as_str(), SUBJECT_NODE);
        prop_assert_eq!(edge.object.as_str(), OBJECT_NODE);
        prop_assert_eq!(&edge.predicates, &vec![input.predicate.clone()]);
    }

    /// Empty identifiers and lists never appear as empty containers.
    #[test]
    fn one_hop_omits_empty_fields(input in arb_trapi_input()) {
        let value = TrapiQuery::one_hop(&input).unwrap().to_value().unwrap();
        let qg = &value["message"]["query_graph"];

        for (key, id, categories) in [
            (SUBJECT_NODE, &input.subject, &input.subject_categories),
            (OBJECT_NODE, &input.object, &input.object_categories),
        ] {
            let node = qg["nodes"][key].as_object().unwrap();
            prop_assert_eq!(node.contains_key("ids"), !id.is_empty());
            let has_categories = categories.as_ref().is_some_and(|c| !c.is_empty());
            prop_assert_eq!(node.contains_key("categories"), has_categories);
        }

        let edge = qg["edges"][EDGE].as_object().unwrap();
        let has_attributes = input.attributes.as_ref().is_some_and(|a| !a.is_empty());
        prop_assert_eq!(edge.contains_key("attributes"), has_attributes);
        prop_assert!(!edge.contains_key("qualifiers"));
    }
}
