//! Kambo Graph: graph-theory building blocks.
//!
//! This crate defines the graph traits every algorithm is written against, a
//! simple-graph implementation backed by an insertion-ordered adjacency map,
//! the classic traversal and shortest-path algorithms, and a plain-text
//! edge-list format for loading graphs from disk.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`graph`] | [`Graph`] and [`GraphMut`] traits |
//! | [`weighted`] | [`WeightedGraph`], [`WeightedGraphMut`] and [`PathWeight`] traits |
//! | [`simple`] | [`SimpleGraph`] and its directed/undirected aliases |
//! | [`algorithms`] | BFS, DFS, components, topological sort, Dijkstra |
//! | [`edge_list`] | Edge-list reading, writing and graph construction |
//! | [`types`] | Summary values (`Density`, `GraphSummary`) |
//! | [`errors`] | [`GraphError`] and the crate [`Result`] alias |
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for graphs, errors, edge records and
//!   summaries.
//!
//! ## Example
//!
//! ```
//! use kambo_graph::{algorithms, GraphMut, SimpleGraph};
//!
//! let mut g = SimpleGraph::new_directed();
//! for v in ["fetch", "build", "test"] {
//!     g.add_vertex(v).unwrap();
//! }
//! g.add_edge(&"fetch", &"build").unwrap();
//! g.add_edge(&"build", &"test").unwrap();
//!
//! let order = algorithms::topological_sort(&g).unwrap();
//! assert_eq!(order, vec!["fetch", "build", "test"]);
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod algorithms;
pub mod edge_list;
pub mod errors;
pub mod graph;
pub mod simple;
pub mod types;
pub mod weighted;

// Re-export the main types at the crate root.
pub use edge_list::{
    build_graph, load_graph, parse_edge_list, read_edge_list, write_edge_list, EdgeRecord,
};
pub use errors::{GraphError, Result};
pub use graph::{Graph, GraphMut};
pub use simple::{
    DirectedGraph, SimpleGraph, UndirectedGraph, WeightedDirectedGraph, WeightedUndirectedGraph,
};
pub use types::{Density, GraphSummary};
pub use weighted::{PathWeight, WeightedGraph, WeightedGraphMut};

/// The current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
