#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Modules
//!
//! - [`graph`]: the [`WeightedGraph`] trait, rendering and comparison helpers
//! - [`edges`]: [`EdgeListGraph`]
//! - [`adjacency`]: [`AdjacencyGraph`]

pub mod adjacency;
pub mod edges;
pub mod graph;

#[cfg(test)]
mod proptests;

// Re-exports for convenience
pub use adjacency::AdjacencyGraph;
pub use edges::EdgeListGraph;
pub use graph::{render, same_graph, Weight, WeightedGraph};
