//! Summary value types computed from a graph.
//!
//! Unlike the graph structures themselves these carry plain values with
//! invariants (a density lies in `[0.0, 1.0]`) and are what the CLI reports.

use crate::{algorithms, Graph};

// ---------------------------------------------------------------------------
// Density
// ---------------------------------------------------------------------------

/// Edge density of a graph in the range `[0.0, 1.0]`.
///
/// The ratio of present edges to the edges a simple graph of the same order
/// could hold: `n(n-1)` when directed, `n(n-1)/2` when undirected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Density(f64);

impl Density {
    /// Creates a [`Density`], returning `None` if `value` is outside
    /// the valid range `[0.0, 1.0]`.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Computes the density of `graph`.
    ///
    /// Graphs with fewer than two vertices have density `0.0`.
    pub fn of<G: Graph>(graph: &G) -> Self {
        let n = graph.order();
        if n < 2 {
            return Self(0.0);
        }
        let possible = (n * (n - 1)) as f64;
        let edges = graph.edge_count() as f64;
        let ratio = if graph.is_directed() {
            edges / possible
        } else {
            2.0 * edges / possible
        };
        Self(ratio.clamp(0.0, 1.0))
    }

    /// Returns the density as an `f64` in `[0.0, 1.0]`.
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Headline figures for a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSummary {
    /// Number of vertices.
    pub order: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Whether edges have a direction.
    pub directed: bool,
    /// Edge density.
    pub density: Density,
    /// Vertices with no incident edges.
    pub isolated: usize,
    /// Number of connected components (weak, for directed graphs).
    pub components: usize,
}

impl GraphSummary {
    /// Computes the summary of `graph`.
    pub fn of<G: Graph>(graph: &G) -> Self {
        let components = algorithms::connected_components(graph);
        // A vertex is isolated exactly when it forms a component on its own.
        let isolated = components.iter().filter(|c| c.len() == 1).count();
        Self {
            order: graph.order(),
            edge_count: graph.edge_count(),
            directed: graph.is_directed(),
            density: Density::of(graph),
            isolated,
            components: components.len(),
        }
    }
}

impl std::fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.directed { "directed" } else { "undirected" };
        writeln!(f, "kind:       {kind}")?;
        writeln!(f, "vertices:   {}", self.order)?;
        writeln!(f, "edges:      {}", self.edge_count)?;
        writeln!(f, "density:    {}", self.density)?;
        writeln!(f, "isolated:   {}", self.isolated)?;
        write!(f, "components: {}", self.components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphMut, SimpleGraph};

    #[test]
    fn test_density_rejects_out_of_range() {
        assert!(Density::new(1.5).is_none());
        assert!(Density::new(-0.1).is_none());
        assert!(Density::new(f64::NAN).is_none());
        assert_eq!(Density::new(0.25).map(Density::as_f64), Some(0.25));
    }

    #[test]
    fn test_complete_undirected_graph_is_dense() {
        let mut g = SimpleGraph::<u8>::new_undirected();
        for v in 0..4 {
            g.add_vertex(v).unwrap();
        }
        for u in 0..4 {
            for v in (u + 1)..4 {
                g.add_edge(&u, &v).unwrap();
            }
        }
        assert_eq!(Density::of(&g).as_f64(), 1.0);
    }

    #[test]
    fn test_directed_density_counts_ordered_pairs() {
        let mut g = SimpleGraph::<u8>::new_directed();
        g.add_vertex(0).unwrap();
        g.add_vertex(1).unwrap();
        g.add_edge(&0, &1).unwrap();
        assert_eq!(Density::of(&g).as_f64(), 0.5);
    }

    #[test]
    fn test_summary_counts_isolated_and_components() {
        let mut g = SimpleGraph::<u8>::new_undirected();
        for v in 0..5 {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(&0, &1).unwrap();
        g.add_edge(&2, &3).unwrap();

        let summary = GraphSummary::of(&g);
        assert_eq!(summary.order, 5);
        assert_eq!(summary.edge_count, 2);
        assert_eq!(summary.isolated, 1);
        assert_eq!(summary.components, 3);
        assert!(summary.to_string().contains("components: 3"));
    }

    #[test]
    fn test_empty_graph_summary() {
        let g = SimpleGraph::<u8>::default();
        let summary = GraphSummary::of(&g);
        assert_eq!(summary.order, 0);
        assert_eq!(summary.density.as_f64(), 0.0);
        assert_eq!(summary.components, 0);
    }
}
