//! Serialisation behind the `serde` feature.
#![cfg(feature = "serde")]

use kambo_graph::{
    algorithms, read_edge_list, EdgeRecord, Graph, GraphError, GraphMut, GraphSummary, SimpleGraph,
};
use pretty_assertions::assert_eq;

#[test]
fn test_graph_survives_json() {
    let mut g = SimpleGraph::<u32, i64>::new_weighted_directed();
    g.add_vertex(1).unwrap();
    g.add_vertex(2).unwrap();
    g.add_edge(&1, &2).unwrap();

    let json = serde_json::to_string(&g).unwrap();
    let back: SimpleGraph<u32, i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, g);
}

#[test]
fn test_undirected_graph_survives_json() {
    let mut g = SimpleGraph::<u32, i32>::new_weighted_undirected();
    for v in 1..=3 {
        g.add_vertex(v).unwrap();
    }
    g.add_edge(&1, &2).unwrap();
    g.add_edge(&3, &2).unwrap();

    let json = serde_json::to_string(&g).unwrap();
    let back: SimpleGraph<u32, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.edge_count(), 2);
    assert_eq!(back, g);
}

fn rejection(json: &str) -> String {
    serde_json::from_str::<SimpleGraph<u32, i32>>(json)
        .expect_err("graph should be rejected")
        .to_string()
}

#[test]
fn test_one_sided_undirected_edge_is_rejected() {
    let err = serde_json::from_str::<SimpleGraph<u32>>(
        r#"{"adjacency":{"1":{"2":null},"2":{}},"directed":false}"#,
    )
    .expect_err("graph should be rejected");
    assert!(err.to_string().contains("not mirrored"), "{err}");
}

#[test]
fn test_undirected_weights_must_agree() {
    let err = rejection(r#"{"adjacency":{"1":{"2":3},"2":{"1":4}},"directed":false}"#);
    assert!(err.contains("not mirrored"), "{err}");
}

#[test]
fn test_self_loop_is_rejected() {
    let err = rejection(r#"{"adjacency":{"1":{"1":5}},"directed":true}"#);
    assert!(err.contains("self-loop"), "{err}");
}

#[test]
fn test_dangling_neighbour_is_rejected() {
    let json = r#"{"adjacency":{"1":{"9":null}},"directed":true}"#;
    let err = serde_json::from_str::<SimpleGraph<u32>>(json).expect_err("graph should be rejected");
    assert!(err.to_string().contains("not a vertex"), "{err}");

    let ok: SimpleGraph<u32> =
        serde_json::from_str(r#"{"adjacency":{"1":{"9":null},"9":{}},"directed":true}"#).unwrap();
    assert_eq!(algorithms::topological_sort(&ok).unwrap(), vec![1, 9]);
}

#[test]
fn test_edge_record_fields() {
    let records = read_edge_list("4 5 -1\n".as_bytes()).unwrap();
    let value = serde_json::to_value(records[0]).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "source": 4, "target": 5, "weight": -1, "line": 1 })
    );
    let back: EdgeRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, records[0]);
}

#[test]
fn test_summary_serialises_density_as_number() {
    let g = SimpleGraph::<u32>::new_undirected();
    let value = serde_json::to_value(GraphSummary::of(&g)).unwrap();
    assert_eq!(value["density"], serde_json::json!(0.0));
    assert_eq!(value["order"], serde_json::json!(0));
}

#[test]
fn test_error_serialises_with_variant_name() {
    let value = serde_json::to_value(GraphError::edge_list(3, "bad")).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "EdgeList": { "line": 3, "reason": "bad" } })
    );
}
