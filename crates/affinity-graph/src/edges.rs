//! Edge-list backed graph.
//!
//! Stores the vertex set alongside a flat list of edge records. Lookups
//! scan the list, which keeps the representation small and obvious.

use crate::graph::{render, Weight, WeightedGraph};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// A single directed edge. Only ever stored with `weight > 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Edge<L> {
    source: L,
    target: L,
    weight: Weight,
}

/// [`WeightedGraph`] backed by a vertex set and a list of edges.
#[derive(Clone, Debug)]
pub struct EdgeListGraph<L> {
    vertices: HashSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L> EdgeListGraph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<L> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> EdgeListGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| &e.source == source && &e.target == target)
    }
}

impl<L> WeightedGraph<L> for EdgeListGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn add(&mut self, vertex: L) -> bool {
        let added = self.vertices.insert(vertex);
        self.check_invariants();
        added
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Weight {
        let previous = match self.position(&source, &target) {
            Some(i) if weight > 0 => std::mem::replace(&mut self.edges[i].weight, weight),
            Some(i) => self.edges.swap_remove(i).weight,
            None if weight > 0 => {
                self.vertices.insert(source.clone());
                self.vertices.insert(target.clone());
                self.edges.push(Edge {
                    source,
                    target,
                    weight,
                });
                0
            }
            None => 0,
        };
        self.check_invariants();
        previous
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }
        let before = self.edges.len();
        self.edges.retain(|e| &e.source != vertex && &e.target != vertex);
        log::trace!(
            "edge-list graph: removed vertex and {} incident edges",
            before - self.edges.len()
        );
        self.check_invariants();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.clone()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| &e.target == target)
            .map(|e| (e.source.clone(), e.weight))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| &e.source == source)
            .map(|e| (e.target.clone(), e.weight))
            .collect()
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut pairs = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            assert!(edge.weight > 0, "stored edge has weight {}", edge.weight);
            assert!(
                self.vertices.contains(&edge.source) && self.vertices.contains(&edge.target),
                "edge endpoint missing from vertex set"
            );
            assert!(
                pairs.insert((&edge.source, &edge.target)),
                "parallel edge between the same ordered pair"
            );
        }
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.position(source, target).map_or(0, |i| self.edges[i].weight)
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Vec<(L, L, Weight)> {
        self.edges
            .iter()
            .map(|e| (e.source.clone(), e.target.clone(), e.weight))
            .collect()
    }
}

impl<L> fmt::Display for EdgeListGraph<L>
where
    L: Clone + Eq + Hash + Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
