//! Corpus ingestion.
//!
//! [`CorpusBuilder`] turns lines of text into a word affinity graph:
//!
//! 1. Split each line into fragments at `. , ? ; : !`
//! 2. Split each fragment into words at spaces, skipping empty words
//! 3. For each adjacent pair `(w1, w2)`, add 1 to the weight of
//!    `lower(w1) -> lower(w2)`
//!
//! Pairs never span a delimiter or a line break.
//!
//! With [`Segmentation::Whitespace`] step 1 is skipped: the whole line is a
//! single fragment and punctuation stays attached to its word, so
//! `"Hello, HELLO, hello, goodbye!"` yields `hello, -> hello,` (weight 2)
//! and `hello, -> goodbye!` (weight 1).

use crate::error::{Error, Result};
use crate::text::{corpus_words, fold_case, fragments};
use affinity_graph::{Weight, WeightedGraph};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How corpus lines are cut before counting adjacencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segmentation {
    /// Cut at sentence delimiters, then at spaces.
    #[default]
    Fragments,
    /// Cut at spaces only; punctuation is part of the word.
    Whitespace,
}

/// Statistics from a corpus load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Lines read.
    pub lines: usize,
    /// Fragments seen, including empty ones.
    pub fragments: usize,
    /// Adjacent word pairs counted.
    pub pairs: usize,
    /// Vertices in the finished graph.
    pub vertices: usize,
    /// Distinct edges in the finished graph.
    pub edges: usize,
}

/// Accumulates corpus text into a graph.
///
/// Generic over the graph backend.
pub struct CorpusBuilder<G> {
    graph: G,
    segmentation: Segmentation,
    stats: IngestStats,
}

impl<G> Default for CorpusBuilder<G>
where
    G: WeightedGraph<String> + Default,
{
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<G> CorpusBuilder<G>
where
    G: WeightedGraph<String>,
{
    /// Creates a builder that adds to `graph`.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            segmentation: Segmentation::default(),
            stats: IngestStats::default(),
        }
    }

    /// Sets how lines are cut.
    pub fn with_segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation = segmentation;
        self
    }

    /// Counts the word adjacencies of one line.
    pub fn add_line(&mut self, line: &str) {
        self.stats.lines += 1;
        match self.segmentation {
            Segmentation::Fragments => {
                for fragment in fragments(line) {
                    self.add_fragment(fragment);
                }
            }
            Segmentation::Whitespace => self.add_fragment(line),
        }
    }

    /// Adds every line of an in-memory text.
    pub fn add_text(&mut self, text: &str) {
        for line in text.lines() {
            self.add_line(line);
        }
    }

    /// Adds every line read from `reader`.
    ///
    /// `origin` names the source in errors. Lines already consumed before a
    /// read failure stay counted, so callers should discard the builder on
    /// error.
    pub fn add_reader<R: BufRead>(&mut self, reader: R, origin: &str) -> Result<()> {
        for line in reader.lines() {
            let line = line.map_err(|e| Error::corpus_unreadable(origin, e))?;
            self.add_line(&line);
        }
        Ok(())
    }

    /// Adds every line of the file at `path`.
    pub fn add_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        log::info!("Loading corpus from {:?}", path);
        let file = File::open(path).map_err(|e| Error::corpus_unreadable(origin.as_str(), e))?;
        self.add_reader(BufReader::new(file), &origin)
    }

    /// Statistics so far. Vertex and edge counts are filled in by
    /// [`build`](Self::build).
    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Finishes the load.
    pub fn build(self) -> (G, IngestStats) {
        let mut stats = self.stats;
        stats.vertices = self.graph.vertex_count();
        stats.edges = self.graph.edge_count();
        log::debug!(
            "Corpus loaded: {} lines, {} fragments, {} pairs -> {} vertices, {} edges",
            stats.lines,
            stats.fragments,
            stats.pairs,
            stats.vertices,
            stats.edges
        );
        (self.graph, stats)
    }

    fn add_fragment(&mut self, fragment: &str) {
        self.stats.fragments += 1;
        let words: Vec<String> = corpus_words(fragment).map(fold_case).collect();
        for pair in words.windows(2) {
            self.bump(&pair[0], &pair[1]);
        }
    }

    fn bump(&mut self, source: &str, target: &str) {
        let (source, target) = (source.to_string(), target.to_string());
        let count: Weight = self.graph.weight(&source, &target).saturating_add(1);
        self.graph.set(source, target, count);
        self.stats.pairs += 1;
    }
}
