//! # affinity-cli
//!
//! Command-line front end for the word affinity poet.
//!
//! - `poem`: bridge a text, or each line of stdin
//! - `bridge`: show the bridge word between two words
//! - `graph`: print the affinity graph
//! - `stats`: print corpus statistics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Args, Command};
pub use commands::run;
pub use config::{Backend, Config, Settings};
pub use error::{Error, Result};
