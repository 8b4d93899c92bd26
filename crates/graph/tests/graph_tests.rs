//! End-to-end behaviour of the public graph API.

use kambo_graph::{algorithms, *};
use pretty_assertions::assert_eq;

fn diamond() -> SimpleGraph<&'static str, u32> {
    let mut g = SimpleGraph::new_weighted_directed();
    for v in ["src", "left", "right", "sink"] {
        g.add_vertex(v).unwrap();
    }
    g.set_edge_weight(&"src", &"left", 2).unwrap();
    g.set_edge_weight(&"src", &"right", 1).unwrap();
    g.set_edge_weight(&"left", &"sink", 1).unwrap();
    g.set_edge_weight(&"right", &"sink", 5).unwrap();
    g
}

// ═══════════════════════════════════════════════════════════════════════
// Structure
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_new_graphs_are_empty() {
    let directed = DirectedGraph::<u32>::new_directed();
    let undirected = UndirectedGraph::<u32>::new_undirected();

    assert!(directed.is_empty());
    assert!(directed.is_directed());
    assert!(undirected.is_empty());
    assert!(!undirected.is_directed());
    assert_eq!(undirected.edge_count(), 0);
}

#[test]
fn test_neighbors_of_missing_vertex_is_none() {
    let g = diamond();
    assert!(g.neighbors(&"nowhere").is_none());
    assert_eq!(g.degree(&"nowhere"), None);
    assert_eq!(g.degree(&"src"), Some(2));
}

#[test]
fn test_removing_a_vertex_detaches_it_everywhere() {
    let mut g = diamond();
    g.remove_vertex(&"left").unwrap();

    assert_eq!(g.order(), 3);
    assert_eq!(g.edge_count(), 2);
    assert!(!g.contains_edge(&"src", &"left"));
    assert_eq!(g.remove_vertex(&"left"), Err(GraphError::VertexNotFound));
}

#[test]
fn test_remove_isolated_after_edge_removal() {
    let mut g = UndirectedGraph::<u32>::new_undirected();
    for v in 0..3 {
        g.add_vertex(v).unwrap();
    }
    g.add_edge(&0, &1).unwrap();
    g.add_edge(&1, &2).unwrap();
    g.remove_edge(&1, &2).unwrap();

    assert_eq!(g.remove_isolated_vertices(), 1);
    let remaining: Vec<u32> = g.vertices().copied().collect();
    assert_eq!(remaining, vec![0, 1]);
}

#[test]
fn test_weighted_graph_clone_is_independent() {
    let original = diamond();
    let mut copy = original.clone();
    copy.set_edge_weight(&"src", &"left", 100).unwrap();

    assert_eq!(original.edge_weight(&"src", &"left"), Some(&2));
    assert_eq!(copy.edge_weight(&"src", &"left"), Some(&100));
    assert_ne!(original, copy);
}

// ═══════════════════════════════════════════════════════════════════════
// Algorithms
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_weighted_and_hop_paths_differ() {
    let g = diamond();

    assert_eq!(
        algorithms::shortest_weighted_path(&g, &"src", &"sink").unwrap(),
        Some((3, vec!["src", "left", "sink"]))
    );
    assert_eq!(
        algorithms::shortest_path(&g, &"src", &"sink")
            .unwrap()
            .map(|p| p.len()),
        Some(3)
    );
}

#[test]
fn test_dijkstra_distances_for_every_reachable_vertex() {
    let g = diamond();
    let dist = algorithms::dijkstra(&g, &"left").unwrap();

    assert_eq!(dist.len(), 2);
    assert_eq!(dist[&"left"], 0);
    assert_eq!(dist[&"sink"], 1);
}

#[test]
fn test_topological_sort_of_diamond() {
    let g = diamond();
    assert_eq!(
        algorithms::topological_sort(&g).unwrap(),
        vec!["src", "left", "right", "sink"]
    );
}

#[test]
fn test_path_queries_reject_missing_endpoints() {
    let g = diamond();
    assert_eq!(
        algorithms::has_path(&g, &"src", &"ghost"),
        Err(GraphError::VertexNotFound)
    );
    assert_eq!(
        algorithms::dijkstra(&g, &"ghost"),
        Err(GraphError::VertexNotFound)
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Edge lists
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_edge_list_round_trip_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ring.txt");
    std::fs::write(&path, "# ring\n0 1\n1 2 3\n2 0\n").unwrap();

    let g = load_graph(&path, false).unwrap();
    assert_eq!(g.order(), 3);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.edge_weight(&2, &1), Some(&3));
    assert_eq!(algorithms::connected_components(&g).len(), 1);

    let mut out = Vec::new();
    write_edge_list(&g, &mut out).unwrap();
    let reread = build_graph(&read_edge_list(out.as_slice()).unwrap(), false).unwrap();
    assert_eq!(reread, g);
}

#[test]
fn test_loaded_path_weight_overflow_is_an_error() {
    let records = read_edge_list("0 1 2000000000\n1 2 2000000000\n".as_bytes()).unwrap();
    let g = build_graph(&records, true).unwrap();

    assert_eq!(
        algorithms::shortest_weighted_path(&g, &1, &2).unwrap(),
        Some((2_000_000_000, vec![1, 2]))
    );
    assert!(matches!(
        algorithms::shortest_weighted_path(&g, &0, &2),
        Err(GraphError::InvalidOperation(msg)) if msg.contains("overflows")
    ));
}

#[test]
fn test_summary_of_loaded_graph() {
    let records = read_edge_list("0 1\n2 3\n3 4\n".as_bytes()).unwrap();
    let g = build_graph(&records, true).unwrap();
    let summary = GraphSummary::of(&g);

    assert_eq!(summary.order, 5);
    assert_eq!(summary.edge_count, 3);
    assert_eq!(summary.components, 2);
    assert_eq!(summary.isolated, 0);
    assert!(summary.directed);
}
