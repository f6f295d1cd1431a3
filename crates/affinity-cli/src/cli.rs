//! Command-line arguments.

use crate::config::Backend;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Poet - insert bridge words learned from a corpus
#[derive(Parser, Debug)]
#[command(name = "poet")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Corpus file to learn word affinities from
    #[arg(long, env = "AFFINITY_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Graph backend
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// Keep punctuation attached to corpus words instead of cutting at it
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Leave out text after the last sentence delimiter
    #[arg(long)]
    pub drop_trailing: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write a poem from the given words, or from each line of stdin
    Poem {
        /// Input text; read from stdin when empty
        input: Vec<String>,
    },
    /// Show the bridge word between two words
    Bridge {
        /// Word before the bridge
        first: String,
        /// Word after the bridge
        second: String,
    },
    /// Print the affinity graph
    Graph,
    /// Print corpus statistics
    Stats,
}
