//! Adjacency-map implementation of a simple graph.
//!
//! A simple graph has no self-loops and at most one edge between any ordered
//! pair of vertices (any unordered pair, when undirected). Storage is an
//! insertion-ordered map from each vertex to its out-neighbours and the weight
//! of the edge leading to each, so iteration order is stable across runs.

use std::{collections::HashSet, fmt::Debug, hash::Hash};

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    graph::VertexIter, Graph, GraphError, GraphMut, Result, WeightedGraph, WeightedGraphMut,
};

/// A simple graph backed by an adjacency map.
///
/// `W` is the edge weight type; unweighted graphs use the default `()`.
/// Undirected edges are stored in both endpoints' neighbour maps with the same
/// weight.
///
/// With the `serde` feature, deserialisation re-checks the graph's invariants:
/// every neighbour must be a vertex, there are no self-loops, and undirected
/// edges are mirrored with equal weights.
///
/// # Example
///
/// ```
/// use kambo_graph::{Graph, GraphMut, SimpleGraph};
///
/// let mut g = SimpleGraph::new_undirected();
/// g.add_vertex("a").unwrap();
/// g.add_vertex("b").unwrap();
/// g.add_edge(&"a", &"b").unwrap();
///
/// assert!(g.contains_edge(&"b", &"a"));
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSimpleGraph<V, W>",
        bound(deserialize = "V: serde::Deserialize<'de>, W: serde::Deserialize<'de> + PartialEq")
    )
)]
pub struct SimpleGraph<V, W = ()>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + Debug,
{
    adjacency: IndexMap<V, IndexMap<V, W>>,
    directed: bool,
}

/// A directed graph without weights.
pub type DirectedGraph<V> = SimpleGraph<V, ()>;

/// An undirected graph without weights.
pub type UndirectedGraph<V> = SimpleGraph<V, ()>;

/// A directed graph with weights of type `W`.
pub type WeightedDirectedGraph<V, W> = SimpleGraph<V, W>;

/// An undirected graph with weights of type `W`.
pub type WeightedUndirectedGraph<V, W> = SimpleGraph<V, W>;

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<V, W> SimpleGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + Debug,
{
    fn new(directed: bool) -> Self {
        Self {
            adjacency: IndexMap::new(),
            directed,
        }
    }

    /// Creates an empty graph with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(vertices),
            directed,
        }
    }

    /// Creates an empty directed graph with weights of type `W`.
    #[must_use]
    pub fn new_weighted_directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph with weights of type `W`.
    #[must_use]
    pub fn new_weighted_undirected() -> Self {
        Self::new(false)
    }

    /// Returns an iterator over every edge as `(source, target, weight)`.
    ///
    /// Undirected edges are yielded once, oriented from the endpoint that was
    /// added to the graph first.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(i, (u, targets))| {
                targets.iter().filter_map(move |(v, w)| {
                    let keep = self.directed
                        || self.adjacency.get_index_of(v).is_some_and(|j| i < j);
                    keep.then_some((u, v, w))
                })
            })
    }

    fn check_endpoints(&self, u: &V, v: &V) -> Result<()> {
        if !self.adjacency.contains_key(u) || !self.adjacency.contains_key(v) {
            return Err(GraphError::VertexNotFound);
        }
        if u == v {
            return Err(GraphError::invalid("self-loops are not permitted in a simple graph"));
        }
        Ok(())
    }

    /// Stores `weight` on `u -> v`, mirroring it on `v -> u` when undirected.
    /// Both endpoints must already be present.
    fn link(&mut self, u: &V, v: &V, weight: W) {
        if !self.directed {
            if let Some(targets) = self.adjacency.get_mut(v) {
                targets.insert(u.clone(), weight.clone());
            }
        }
        if let Some(targets) = self.adjacency.get_mut(u) {
            targets.insert(v.clone(), weight);
        }
    }
}

impl<V> SimpleGraph<V, ()>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Creates an empty directed graph without weights.
    #[must_use]
    pub fn new_directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph without weights.
    #[must_use]
    pub fn new_undirected() -> Self {
        Self::new(false)
    }
}

impl<V, W> Default for SimpleGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + Debug,
{
    /// An empty undirected graph.
    fn default() -> Self {
        Self::new(false)
    }
}

// ---------------------------------------------------------------------------
// Graph / GraphMut
// ---------------------------------------------------------------------------

impl<V, W> Graph for SimpleGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + Debug,
{
    type Vertex = V;

    fn vertices(&self) -> VertexIter<'_, V> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, v: &V) -> Option<VertexIter<'_, V>> {
        self.adjacency
            .get(v)
            .map(|targets| Box::new(targets.keys()) as VertexIter<'_, V>)
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|targets| targets.contains_key(v))
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn order(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        let total: usize = self.adjacency.values().map(IndexMap::len).sum();
        if self.directed {
            total
        } else {
            total / 2
        }
    }

    fn degree(&self, v: &V) -> Option<usize> {
        self.adjacency.get(v).map(IndexMap::len)
    }
}

impl<V, W> GraphMut for SimpleGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + Debug + Default,
{
    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::VertexAlreadyExists);
        }
        debug!(?vertex, "adding vertex");
        self.adjacency.insert(vertex, IndexMap::new());
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        if self.adjacency.shift_remove(vertex).is_none() {
            return Err(GraphError::VertexNotFound);
        }
        for targets in self.adjacency.values_mut() {
            targets.shift_remove(vertex);
        }
        debug!(?vertex, "removed vertex and its incident edges");
        Ok(())
    }

    fn add_edge(&mut self, u: &V, v: &V) -> Result<()> {
        self.check_endpoints(u, v)?;
        if self.contains_edge(u, v) {
            return Err(GraphError::EdgeAlreadyExists);
        }
        debug!(?u, ?v, directed = self.directed, "adding edge");
        self.link(u, v, W::default());
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> Result<()> {
        if !self.contains_edge(u, v) {
            return Err(GraphError::EdgeNotFound);
        }
        if let Some(targets) = self.adjacency.get_mut(u) {
            targets.shift_remove(v);
        }
        if !self.directed {
            if let Some(targets) = self.adjacency.get_mut(v) {
                targets.shift_remove(u);
            }
        }
        debug!(?u, ?v, "removed edge");
        Ok(())
    }

    fn remove_isolated_vertices(&mut self) -> usize {
        // Undirected edges always appear in the target's own map, so only
        // directed graphs need the incoming side checked.
        let has_incoming: HashSet<V> = if self.directed {
            self.adjacency
                .values()
                .flat_map(|targets| targets.keys().cloned())
                .collect()
        } else {
            HashSet::new()
        };

        let before = self.adjacency.len();
        self.adjacency
            .retain(|v, targets| !targets.is_empty() || has_incoming.contains(v));
        let removed = before - self.adjacency.len();
        debug!(removed, "removed isolated vertices");
        removed
    }
}

// ---------------------------------------------------------------------------
// Weighted access
// ---------------------------------------------------------------------------

impl<V, W> WeightedGraph for SimpleGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + Debug,
{
    type Weight = W;

    fn edge_weight(&self, u: &V, v: &V) -> Option<&W> {
        self.adjacency.get(u)?.get(v)
    }
}

impl<V, W> WeightedGraphMut for SimpleGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + Debug + Default,
{
    fn set_edge_weight(&mut self, u: &V, v: &V, weight: W) -> Result<()> {
        self.check_endpoints(u, v)?;
        debug!(?u, ?v, ?weight, "setting edge weight");
        self.link(u, v, weight);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Deserialisation
// ---------------------------------------------------------------------------

/// Unchecked wire form of [`SimpleGraph`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSimpleGraph<V, W>
where
    V: Eq + Hash,
{
    adjacency: IndexMap<V, IndexMap<V, W>>,
    directed: bool,
}

#[cfg(feature = "serde")]
impl<V, W> TryFrom<RawSimpleGraph<V, W>> for SimpleGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + Debug + PartialEq,
{
    type Error = GraphError;

    fn try_from(raw: RawSimpleGraph<V, W>) -> Result<Self> {
        for (u, targets) in &raw.adjacency {
            for (v, weight) in targets {
                if u == v {
                    return Err(GraphError::invalid(format!("self-loop on {u:?}")));
                }
                let Some(back) = raw.adjacency.get(v) else {
                    return Err(GraphError::invalid(format!(
                        "neighbour {v:?} of {u:?} is not a vertex"
                    )));
                };
                if !raw.directed && back.get(u) != Some(weight) {
                    return Err(GraphError::invalid(format!(
                        "undirected edge {u:?} - {v:?} is not mirrored with the same weight"
                    )));
                }
            }
        }
        Ok(Self {
            adjacency: raw.adjacency,
            directed: raw.directed,
        })
    }
}
