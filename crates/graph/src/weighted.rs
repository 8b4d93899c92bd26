//! Traits for graphs whose edges carry a weight.

use std::fmt::Debug;

use crate::{Graph, GraphMut, Result};

/// Read access to edge weights.
pub trait WeightedGraph: Graph {
    /// The type of weights associated with edges.
    type Weight: Clone + Debug;

    /// Returns the weight of the edge from `u` to `v`, or `None` if there is no
    /// such edge.
    fn edge_weight(&self, u: &Self::Vertex, v: &Self::Vertex) -> Option<&Self::Weight>;
}

/// Mutation of edge weights.
pub trait WeightedGraphMut: WeightedGraph + GraphMut {
    /// Sets the weight of the edge from `u` to `v`, creating the edge if it does
    /// not exist yet.
    ///
    /// Undirected graphs keep the weight identical in both directions.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    ///   either endpoint is absent.
    /// - [`GraphError::InvalidOperation`](crate::GraphError::InvalidOperation)
    ///   if the graph forbids the edge.
    fn set_edge_weight(
        &mut self,
        u: &Self::Vertex,
        v: &Self::Vertex,
        weight: Self::Weight,
    ) -> Result<()>;
}

/// Weights that shortest-path algorithms can total.
///
/// Sums are checked so an overflowing path is reported as an error instead of
/// wrapping or panicking. Implemented for every primitive integer type.
pub trait PathWeight: Copy + Ord + Default + Debug {
    /// Returns `self + rhs`, or `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_path_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl PathWeight for $t {
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_path_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
