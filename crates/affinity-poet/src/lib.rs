#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Modules
//!
//! - [`text`]: fragment and word segmentation
//! - [`corpus`]: building the affinity graph from corpus text
//! - [`poet`]: bridge-word search and poem generation
//! - [`options`]: poem generation options
//! - [`error`]: error types and Result alias

pub mod corpus;
pub mod error;
pub mod options;
pub mod poet;
pub mod text;

// Re-exports for convenience
pub use corpus::{CorpusBuilder, IngestStats, Segmentation};
pub use error::{Error, Result};
pub use options::{PoetOptions, TrailingText};
pub use poet::AffinityPoet;
