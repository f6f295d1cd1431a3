//! The weighted directed graph contract.
//!
//! [`WeightedGraph`] is the only thing callers should depend on. Both
//! [`EdgeListGraph`](crate::EdgeListGraph) and
//! [`AdjacencyGraph`](crate::AdjacencyGraph) implement it and are
//! observably indistinguishable through it.
//!
//! # Invariants
//!
//! After every public operation returns:
//!
//! - every stored edge has a weight greater than zero;
//! - both endpoints of every edge are members of the vertex set;
//! - at most one edge exists per ordered `(source, target)` pair.
//!
//! Implementations check these in [`WeightedGraph::check_invariants`],
//! which panics on violation when debug assertions are enabled.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

/// Edge weight. Values `<= 0` mean "no edge".
pub type Weight = i32;

/// A mutable graph of labeled vertices and positively weighted directed edges.
///
/// No operation fails: queries about vertices that are not in the graph
/// return empty results. Every query returns an owned snapshot; mutating
/// it never affects the graph.
///
/// # Example
///
/// ```rust
/// use affinity_graph::{AdjacencyGraph, WeightedGraph};
///
/// let mut graph = AdjacencyGraph::new();
/// assert_eq!(graph.set("a", "b", 3), 0);
/// assert_eq!(graph.set("a", "b", 5), 3);
/// assert_eq!(graph.targets(&"a").get("b"), Some(&5));
///
/// // Zero weight deletes the edge but keeps both vertices.
/// assert_eq!(graph.set("a", "b", 0), 5);
/// assert!(graph.targets(&"a").is_empty());
/// assert_eq!(graph.vertices().len(), 2);
/// ```
pub trait WeightedGraph<L>
where
    L: Clone + Eq + Hash,
{
    /// Adds a vertex with no edges.
    ///
    /// Returns `true` if the vertex was not already present.
    fn add(&mut self, vertex: L) -> bool;

    /// Sets the weight of the edge `source -> target`.
    ///
    /// A positive weight creates or replaces the edge and adds both
    /// endpoints to the vertex set. A weight `<= 0` deletes the edge if it
    /// exists and otherwise does nothing.
    ///
    /// Returns the previous weight of the edge, or 0 if there was none.
    fn set(&mut self, source: L, target: L, weight: Weight) -> Weight;

    /// Removes a vertex together with every edge into or out of it.
    ///
    /// Returns `true` if the vertex was present.
    fn remove(&mut self, vertex: &L) -> bool;

    /// Snapshot of all vertex labels.
    fn vertices(&self) -> HashSet<L>;

    /// Every vertex with an edge into `target`, mapped to that edge's weight.
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// Every vertex `source` has an edge to, mapped to that edge's weight.
    fn targets(&self, source: &L) -> HashMap<L, Weight>;

    /// Panics if the representation invariants do not hold.
    ///
    /// Does nothing unless debug assertions are enabled.
    fn check_invariants(&self);

    /// Current weight of `source -> target`, or 0 when there is no such edge.
    fn weight(&self, source: &L, target: &L) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    /// Whether `vertex` is in the graph.
    fn contains(&self, vertex: &L) -> bool {
        self.vertices().contains(vertex)
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Snapshot of all edges as `(source, target, weight)` triples, in no
    /// particular order.
    fn edges(&self) -> Vec<(L, L, Weight)> {
        let mut edges = Vec::new();
        for source in self.vertices() {
            for (target, weight) in self.targets(&source) {
                edges.push((source.clone(), target, weight));
            }
        }
        edges
    }
}

/// Renders a graph as canonical text.
///
/// Vertices are sorted, edges are sorted by `(source, target)`. Two graphs
/// in the same state render identically regardless of backend.
///
/// ```rust
/// use affinity_graph::{render, EdgeListGraph, WeightedGraph};
///
/// let mut graph = EdgeListGraph::new();
/// graph.set("b", "a", 1);
/// graph.add("c");
/// assert_eq!(render(&graph), "vertices: [a, b, c]; edges: [b -> a (1)]");
/// ```
pub fn render<L, G>(graph: &G) -> String
where
    L: Clone + Eq + Hash + Ord + Display,
    G: WeightedGraph<L> + ?Sized,
{
    let vertices: BTreeSet<L> = graph.vertices().into_iter().collect();
    let mut edges = graph.edges();
    edges.sort();

    let vertices = vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let edges = edges
        .iter()
        .map(|(source, target, weight)| format!("{source} -> {target} ({weight})"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("vertices: [{vertices}]; edges: [{edges}]")
}

/// Whether two graphs, possibly of different backends, hold the same
/// vertices and the same weighted edges.
pub fn same_graph<L, A, B>(a: &A, b: &B) -> bool
where
    L: Clone + Eq + Hash,
    A: WeightedGraph<L> + ?Sized,
    B: WeightedGraph<L> + ?Sized,
{
    let vertices = a.vertices();
    vertices == b.vertices() && vertices.iter().all(|v| a.targets(v) == b.targets(v))
}
