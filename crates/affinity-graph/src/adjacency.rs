//! Adjacency backed graph.
//!
//! Wraps a petgraph `DiGraph` with a label lookup table, so each vertex
//! owns its incoming and outgoing edge lists and neighbor queries do not
//! scan the whole graph.

use crate::graph::{render, Weight, WeightedGraph};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// [`WeightedGraph`] backed by a petgraph adjacency list.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<L> {
    /// The underlying directed graph. Node weights are the labels.
    graph: DiGraph<L, Weight>,
    /// Lookup table: label → petgraph NodeIndex.
    node_indices: HashMap<L, NodeIndex>,
}

impl<L> AdjacencyGraph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }
}

impl<L> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> AdjacencyGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn index(&self, vertex: &L) -> Option<NodeIndex> {
        self.node_indices.get(vertex).copied()
    }

    /// Returns the index for `vertex`, inserting it if absent.
    fn ensure(&mut self, vertex: L) -> NodeIndex {
        if let Some(idx) = self.index(&vertex) {
            return idx;
        }
        let idx = self.graph.add_node(vertex.clone());
        self.node_indices.insert(vertex, idx);
        idx
    }

    fn find_edge(&self, source: &L, target: &L) -> Option<petgraph::graph::EdgeIndex> {
        self.graph.find_edge(self.index(source)?, self.index(target)?)
    }

    fn neighbors(&self, vertex: &L, direction: Direction) -> HashMap<L, Weight> {
        let Some(idx) = self.index(vertex) else {
            return HashMap::new();
        };
        self.graph
            .edges_directed(idx, direction)
            .map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                (self.graph[other].clone(), *edge.weight())
            })
            .collect()
    }

    /// Invariant check limited to the entries a `set` can change, so
    /// ingestion stays linear in debug builds.
    fn check_pair(&self, source: &L, target: &L) {
        if !cfg!(debug_assertions) {
            return;
        }
        assert_eq!(
            self.node_indices.len(),
            self.graph.node_count(),
            "lookup table out of sync with graph nodes"
        );
        for label in [source, target] {
            if let Some(idx) = self.index(label) {
                assert!(
                    self.graph.node_weight(idx) == Some(label),
                    "lookup table points at the wrong node"
                );
            }
        }
        let (Some(s), Some(t)) = (self.index(source), self.index(target)) else {
            return;
        };
        let mut connecting = 0;
        for edge in self.graph.edges_connecting(s, t) {
            assert!(*edge.weight() > 0, "stored edge has weight {}", edge.weight());
            connecting += 1;
        }
        assert!(connecting <= 1, "parallel edge between the same ordered pair");
    }
}

impl<L> WeightedGraph<L> for AdjacencyGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn add(&mut self, vertex: L) -> bool {
        let added = if self.node_indices.contains_key(&vertex) {
            false
        } else {
            self.ensure(vertex);
            true
        };
        self.check_invariants();
        added
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Weight {
        let previous = match self.find_edge(&source, &target) {
            Some(edge) if weight > 0 => std::mem::replace(&mut self.graph[edge], weight),
            Some(edge) => self.graph.remove_edge(edge).unwrap_or(0),
            None if weight > 0 => {
                let s = self.ensure(source.clone());
                let t = self.ensure(target.clone());
                self.graph.add_edge(s, t, weight);
                0
            }
            None => 0,
        };
        self.check_pair(&source, &target);
        previous
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(idx) = self.node_indices.remove(vertex) else {
            return false;
        };
        let incident = self.graph.edges_directed(idx, Direction::Outgoing).count()
            + self
                .graph
                .edges_directed(idx, Direction::Incoming)
                .filter(|edge| edge.source() != idx)
                .count();

        // petgraph removes connected edges with the node, then moves the
        // last node into the freed slot; its lookup entry must follow it.
        self.graph.remove_node(idx);
        if let Some(moved) = self.graph.node_weight(idx) {
            self.node_indices.insert(moved.clone(), idx);
        }

        log::trace!("adjacency graph: removed vertex and {incident} incident edges");
        self.check_invariants();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.node_indices.keys().cloned().collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.neighbors(target, Direction::Incoming)
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.neighbors(source, Direction::Outgoing)
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        assert_eq!(
            self.node_indices.len(),
            self.graph.node_count(),
            "lookup table out of sync with graph nodes"
        );
        for (label, &idx) in &self.node_indices {
            assert!(
                self.graph.node_weight(idx) == Some(label),
                "lookup table points at the wrong node"
            );
        }
        let mut pairs = HashSet::with_capacity(self.graph.edge_count());
        for edge in self.graph.edge_references() {
            assert!(*edge.weight() > 0, "stored edge has weight {}", edge.weight());
            assert!(
                pairs.insert((edge.source(), edge.target())),
                "parallel edge between the same ordered pair"
            );
        }
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.find_edge(source, target).map_or(0, |edge| self.graph[edge])
    }

    fn contains(&self, vertex: &L) -> bool {
        self.node_indices.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn edges(&self) -> Vec<(L, L, Weight)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].clone(),
                    self.graph[edge.target()].clone(),
                    *edge.weight(),
                )
            })
            .collect()
    }
}

impl<L> fmt::Display for AdjacencyGraph<L>
where
    L: Clone + Eq + Hash + Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
