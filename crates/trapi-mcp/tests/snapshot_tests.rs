//! Snapshot of the query graph built for a typical open-ended question.

use trapi_mcp::models::{TrapiInput, TrapiQuery};

#[test]
fn test_open_object_query_snapshot() {
    let input = TrapiInput {
        subject: "MONDO:0021117".to_string(),
        object: String::new(),
        predicate: "biolink:risk_affected_by".to_string(),
        subject_categories: Some(vec!["biolink:Disease".to_string()]),
        ..TrapiInput::default()
    };

    let query = TrapiQuery::one_hop(&input).unwrap();

    insta::assert_json_snapshot!(query, @r#"
    {
      "message": {
        "query_graph": {
          "nodes": {
            "n0": {
              "ids": [
                "MONDO:0021117"
              ],
              "categories": [
                "biolink:Disease"
              ]
            },
            "n1": {}
          },
          "edges": {
            "e0": {
              "subject": "n0",
              "object": "n1",
              "predicates": [
                "biolink:risk_affected_by"
              ]
            }
          }
        }
      }
    }
    "#);
}
