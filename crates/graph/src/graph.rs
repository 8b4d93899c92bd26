//! Core graph traits.
//!
//! [`Graph`] is the read-only view every algorithm in [`crate::algorithms`] is
//! written against; [`GraphMut`] adds structural mutation. Implementors choose
//! the vertex type, which only needs to be `Eq + Hash + Clone + Debug`.

use std::{fmt::Debug, hash::Hash};

use crate::Result;

/// Boxed iterator over borrowed vertices.
pub type VertexIter<'a, V> = Box<dyn Iterator<Item = &'a V> + 'a>;

// ---------------------------------------------------------------------------
// Read-only access
// ---------------------------------------------------------------------------

/// Read access to the structure of a graph.
///
/// Only the five required methods touch the underlying storage; the counting
/// helpers are derived from them and may be overridden when the storage can
/// answer faster.
pub trait Graph {
    /// The type of vertices in the graph.
    type Vertex: Eq + Hash + Clone + Debug;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> VertexIter<'_, Self::Vertex>;

    /// Returns an iterator over the neighbours of `v`, or `None` if `v` is not
    /// in the graph.
    ///
    /// For directed graphs these are the out-neighbours.
    fn neighbors(&self, v: &Self::Vertex) -> Option<VertexIter<'_, Self::Vertex>>;

    /// Returns `true` if `v` is in the graph.
    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    /// Returns `true` if there is an edge from `u` to `v`.
    ///
    /// Symmetric for undirected graphs.
    fn contains_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Returns `true` if edges have a direction.
    fn is_directed(&self) -> bool;

    /// Number of vertices (the order of the graph).
    fn order(&self) -> usize {
        self.vertices().count()
    }

    /// Number of edges (the size of the graph).
    ///
    /// Each directed edge is counted once. An undirected edge shows up in both
    /// endpoints' neighbour sets, so the neighbour total is halved.
    fn edge_count(&self) -> usize {
        let total: usize = self
            .vertices()
            .map(|v| self.neighbors(v).map_or(0, |n| n.count()))
            .sum();
        if self.is_directed() {
            total
        } else {
            total / 2
        }
    }

    /// Number of neighbours of `v` (out-degree when directed), or `None` if `v`
    /// is not in the graph.
    fn degree(&self, v: &Self::Vertex) -> Option<usize> {
        self.neighbors(v).map(|n| n.count())
    }

    /// Returns `true` if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.order() == 0
    }
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

/// Structural mutation of a graph.
pub trait GraphMut: Graph {
    /// Adds a vertex with no edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexAlreadyExists`](crate::GraphError::VertexAlreadyExists)
    /// if the vertex is already present.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> Result<()>;

    /// Removes a vertex together with every edge incident to it, incoming or
    /// outgoing.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if the
    /// vertex is absent.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> Result<()>;

    /// Adds an edge from `u` to `v` (both directions when undirected).
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    ///   either endpoint is absent.
    /// - [`GraphError::InvalidOperation`](crate::GraphError::InvalidOperation)
    ///   if the graph forbids the edge (e.g. a self-loop in a simple graph).
    /// - [`GraphError::EdgeAlreadyExists`](crate::GraphError::EdgeAlreadyExists)
    ///   if the edge is already present.
    fn add_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> Result<()>;

    /// Removes the edge from `u` to `v` (both directions when undirected).
    ///
    /// # Errors
    ///
    /// [`GraphError::EdgeNotFound`](crate::GraphError::EdgeNotFound) if the edge
    /// is absent.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> Result<()>;

    /// Removes every vertex with no incident edges and returns how many were
    /// removed.
    fn remove_isolated_vertices(&mut self) -> usize;
}
