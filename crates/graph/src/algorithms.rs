//! Traversal, connectivity and shortest-path algorithms.
//!
//! Every function is generic over [`Graph`] (or [`WeightedGraph`]) and visits
//! neighbours in the order the graph yields them, so results are as
//! deterministic as the underlying graph's iteration order.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet, VecDeque},
    hash::Hash,
};

use crate::{Graph, GraphError, PathWeight, Result, WeightedGraph};

fn ensure_vertex<G: Graph>(graph: &G, v: &G::Vertex) -> Result<()> {
    if graph.contains_vertex(v) {
        Ok(())
    } else {
        Err(GraphError::VertexNotFound)
    }
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Breadth-first visit order starting at `start`.
///
/// # Errors
///
/// [`GraphError::VertexNotFound`] if `start` is not in the graph.
pub fn bfs<G: Graph>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    ensure_vertex(graph, start)?;

    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();

    while let Some(v) = queue.pop_front() {
        order.push(v.clone());
        for n in graph.neighbors(v).into_iter().flatten() {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    Ok(order)
}

/// Depth-first pre-order starting at `start`.
///
/// Neighbours are explored in iteration order, matching a recursive traversal.
///
/// # Errors
///
/// [`GraphError::VertexNotFound`] if `start` is not in the graph.
pub fn dfs<G: Graph>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    ensure_vertex(graph, start)?;

    let mut visited = HashSet::new();
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(v) = stack.pop() {
        if !visited.insert(v) {
            continue;
        }
        order.push(v.clone());
        let next: Vec<_> = graph
            .neighbors(v)
            .into_iter()
            .flatten()
            .filter(|n| !visited.contains(n))
            .collect();
        stack.extend(next.into_iter().rev());
    }
    Ok(order)
}

/// Fewest-hops path from `from` to `to`, endpoints included.
///
/// Returns `Ok(None)` when `to` is unreachable.
///
/// # Errors
///
/// [`GraphError::VertexNotFound`] if either endpoint is not in the graph.
pub fn shortest_path<G: Graph>(
    graph: &G,
    from: &G::Vertex,
    to: &G::Vertex,
) -> Result<Option<Vec<G::Vertex>>> {
    ensure_vertex(graph, from)?;
    ensure_vertex(graph, to)?;

    let mut parent: HashMap<&G::Vertex, &G::Vertex> = HashMap::new();
    let mut visited = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(v) = queue.pop_front() {
        if v == to {
            return Ok(Some(unwind(&parent, to)));
        }
        for n in graph.neighbors(v).into_iter().flatten() {
            if visited.insert(n) {
                parent.insert(n, v);
                queue.push_back(n);
            }
        }
    }
    Ok(None)
}

/// Returns `true` if `to` is reachable from `from`.
///
/// # Errors
///
/// [`GraphError::VertexNotFound`] if either endpoint is not in the graph.
pub fn has_path<G: Graph>(graph: &G, from: &G::Vertex, to: &G::Vertex) -> Result<bool> {
    Ok(shortest_path(graph, from, to)?.is_some())
}

/// Walks a predecessor map back from `target` and returns the path in
/// forward order.
fn unwind<'a, V: Clone + Eq + Hash>(
    parent: &HashMap<&'a V, &'a V>,
    target: &'a V,
) -> Vec<V> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while let Some(&p) = parent.get(current) {
        path.push(p.clone());
        current = p;
    }
    path.reverse();
    path
}

// ---------------------------------------------------------------------------
// Connectivity
// ---------------------------------------------------------------------------

/// Partitions the vertices into connected components.
///
/// Directed graphs are partitioned into weakly connected components (edge
/// direction is ignored). Components are ordered by their earliest vertex in
/// [`Graph::vertices`] order, and vertices within a component keep that order.
pub fn connected_components<G: Graph>(graph: &G) -> Vec<Vec<G::Vertex>> {
    let vertices: Vec<&G::Vertex> = graph.vertices().collect();
    let index: HashMap<&G::Vertex, usize> =
        vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();
    let mut sets = DisjointSet::new(vertices.len());

    for (i, v) in vertices.iter().enumerate() {
        for n in graph.neighbors(v).into_iter().flatten() {
            if let Some(&j) = index.get(n) {
                sets.union(i, j);
            }
        }
    }

    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<G::Vertex>> = Vec::new();
    for (i, v) in vertices.iter().enumerate() {
        let root = sets.find(i);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push((*v).clone());
    }
    components
}

/// Union-find with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
    }
}

/// Orders the vertices of a directed acyclic graph so that every edge points
/// forward (Kahn's algorithm).
///
/// Among vertices that become ready at the same time, earlier vertices in
/// [`Graph::vertices`] order come first.
///
/// # Errors
///
/// - [`GraphError::InvalidOperation`] if the graph is undirected.
/// - [`GraphError::CycleDetected`] if the graph has a cycle.
pub fn topological_sort<G: Graph>(graph: &G) -> Result<Vec<G::Vertex>> {
    if !graph.is_directed() {
        return Err(GraphError::invalid("topological sort requires a directed graph"));
    }

    let mut in_degree: HashMap<&G::Vertex, usize> = graph.vertices().map(|v| (v, 0)).collect();
    for v in graph.vertices() {
        for n in graph.neighbors(v).into_iter().flatten() {
            *in_degree.entry(n).or_insert(0) += 1;
        }
    }

    let mut ready: VecDeque<&G::Vertex> = graph
        .vertices()
        .filter(|v| in_degree.get(v) == Some(&0))
        .collect();
    let mut order = Vec::with_capacity(in_degree.len());

    while let Some(v) = ready.pop_front() {
        order.push(v.clone());
        for n in graph.neighbors(v).into_iter().flatten() {
            if let Some(d) = in_degree.get_mut(n) {
                *d -= 1;
                if *d == 0 {
                    ready.push_back(n);
                }
            }
        }
    }

    if order.len() < in_degree.len() {
        return Err(GraphError::CycleDetected);
    }
    Ok(order)
}

// ---------------------------------------------------------------------------
// Weighted shortest paths
// ---------------------------------------------------------------------------

type ShortestPathTree<'a, V, W> = (HashMap<&'a V, W>, HashMap<&'a V, &'a V>);

fn dijkstra_tree<'a, G>(
    graph: &'a G,
    from: &'a G::Vertex,
) -> Result<ShortestPathTree<'a, G::Vertex, G::Weight>>
where
    G: WeightedGraph,
    G::Weight: PathWeight,
{
    let zero = G::Weight::default();
    let mut dist = HashMap::from([(from, zero)]);
    let mut prev = HashMap::new();
    // The heap holds (distance, slot) pairs so vertices need not be `Ord`.
    let mut slots = vec![from];
    let mut heap = BinaryHeap::from([Reverse((zero, 0usize))]);

    while let Some(Reverse((cost, slot))) = heap.pop() {
        let u = slots[slot];
        if dist.get(u).is_some_and(|best| cost > *best) {
            continue;
        }
        for v in graph.neighbors(u).into_iter().flatten() {
            let Some(&w) = graph.edge_weight(u, v) else {
                continue;
            };
            if w < zero {
                return Err(GraphError::invalid(format!(
                    "negative weight {w:?} on edge {u:?} -> {v:?}"
                )));
            }
            let Some(next) = cost.checked_add(w) else {
                return Err(GraphError::invalid(format!(
                    "path weight overflows at edge {u:?} -> {v:?} ({cost:?} + {w:?})"
                )));
            };
            if dist.get(v).is_none_or(|best| next < *best) {
                dist.insert(v, next);
                prev.insert(v, u);
                slots.push(v);
                heap.push(Reverse((next, slots.len() - 1)));
            }
        }
    }
    Ok((dist, prev))
}

/// Shortest distances from `from` to every reachable vertex (Dijkstra).
///
/// Unreachable vertices are absent from the result; `from` maps to
/// `W::default()`.
///
/// # Errors
///
/// - [`GraphError::VertexNotFound`] if `from` is not in the graph.
/// - [`GraphError::InvalidOperation`] if a reachable edge has a weight below
///   `W::default()`, or if a path total does not fit in `W`.
pub fn dijkstra<G>(graph: &G, from: &G::Vertex) -> Result<HashMap<G::Vertex, G::Weight>>
where
    G: WeightedGraph,
    G::Weight: PathWeight,
{
    ensure_vertex(graph, from)?;
    let (dist, _) = dijkstra_tree(graph, from)?;
    Ok(dist.into_iter().map(|(v, d)| (v.clone(), d)).collect())
}

/// Lowest-total-weight path from `from` to `to`, returned with its total.
///
/// Returns `Ok(None)` when `to` is unreachable.
///
/// # Errors
///
/// Same as [`dijkstra`], plus [`GraphError::VertexNotFound`] for a missing `to`.
pub fn shortest_weighted_path<G>(
    graph: &G,
    from: &G::Vertex,
    to: &G::Vertex,
) -> Result<Option<(G::Weight, Vec<G::Vertex>)>>
where
    G: WeightedGraph,
    G::Weight: PathWeight,
{
    ensure_vertex(graph, from)?;
    ensure_vertex(graph, to)?;
    let (dist, prev) = dijkstra_tree(graph, from)?;
    Ok(dist.get(to).map(|&total| (total, unwind(&prev, to))))
}
