//! Configuration file and settings resolution.
//!
//! Settings come from, in increasing priority:
//!
//! 1. Built-in defaults
//! 2. The TOML config file (`--config`, or the platform config directory)
//! 3. Command-line flags and `AFFINITY_CORPUS`

use crate::cli::Args;
use crate::error::{Error, Result};
use affinity_poet::{PoetOptions, Segmentation, TrailingText};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project directory name under the platform config directory.
pub const PROJECT_NAME: &str = "affinity-poet";

/// Which graph implementation backs the poet.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// petgraph adjacency lists.
    #[default]
    Adjacency,
    /// Flat edge list.
    Edges,
}

/// Contents of the config file.
///
/// ```toml
/// corpus = "corpus.txt"
/// backend = "adjacency"
/// segmentation = "fragments"
///
/// [poem]
/// trailing_text = "keep"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Corpus file.
    pub corpus: Option<PathBuf>,
    /// Graph backend.
    pub backend: Backend,
    /// How corpus lines are cut.
    pub segmentation: Segmentation,
    /// Poem generation options.
    pub poem: PoetOptions,
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Loads the config file.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if a file is there, and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        tracing::debug!("Loaded config from {}", path.display());
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }
}

/// Fully resolved settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Corpus file.
    pub corpus: PathBuf,
    /// Graph backend.
    pub backend: Backend,
    /// How corpus lines are cut.
    pub segmentation: Segmentation,
    /// Poem generation options.
    pub options: PoetOptions,
}

impl Settings {
    /// Applies command-line overrides to `config`.
    pub fn resolve(args: &Args, config: Config) -> Result<Self> {
        let corpus = args.corpus.clone().or(config.corpus).ok_or_else(|| {
            Error::config(
                "No corpus configured. Pass --corpus, set AFFINITY_CORPUS, \
                 or set `corpus` in the config file.",
            )
        })?;

        let mut options = config.poem;
        if args.drop_trailing {
            options.trailing_text = TrailingText::Drop;
        }

        let segmentation = if args.keep_punctuation {
            Segmentation::Whitespace
        } else {
            config.segmentation
        };

        Ok(Self {
            corpus,
            backend: args.backend.unwrap_or(config.backend),
            segmentation,
            options,
        })
    }
}
