//! Bridge-word search and poem generation.

use crate::corpus::{CorpusBuilder, IngestStats};
use crate::error::Result;
use crate::options::{PoetOptions, TrailingText};
use crate::text::{fold_case, poem_words, segments};
use affinity_graph::{AdjacencyGraph, WeightedGraph};
use std::io::BufRead;
use std::path::Path;

/// A graph-based poetry generator.
///
/// Built once from a corpus; poem generation only reads the graph.
///
/// # Example
///
/// ```rust
/// use affinity_poet::AffinityPoet;
///
/// let poet: AffinityPoet =
///     AffinityPoet::from_corpus("This is a test of the Mugar Omni Theater sound system.");
/// assert_eq!(poet.poem("Test the system."), "Test of the system.");
/// ```
#[derive(Clone, Debug)]
pub struct AffinityPoet<G = AdjacencyGraph<String>> {
    graph: G,
    stats: IngestStats,
    options: PoetOptions,
}

impl<G> AffinityPoet<G>
where
    G: WeightedGraph<String> + Default,
{
    /// Builds a poet from the corpus file at `path`.
    ///
    /// Fails with [`Error::CorpusUnreadable`](crate::Error::CorpusUnreadable)
    /// if the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut builder = CorpusBuilder::default();
        builder.add_path(path)?;
        Ok(Self::from_builder(builder))
    }

    /// Builds a poet from corpus lines read from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut builder = CorpusBuilder::default();
        builder.add_reader(reader, "<reader>")?;
        Ok(Self::from_builder(builder))
    }

    /// Builds a poet from an in-memory corpus.
    pub fn from_corpus(corpus: &str) -> Self {
        let mut builder = CorpusBuilder::default();
        builder.add_text(corpus);
        Self::from_builder(builder)
    }
}

impl<G> AffinityPoet<G>
where
    G: WeightedGraph<String>,
{
    /// Finishes `builder` and wraps its graph.
    pub fn from_builder(builder: CorpusBuilder<G>) -> Self {
        let (graph, stats) = builder.build();
        Self {
            graph,
            stats,
            options: PoetOptions::default(),
        }
    }

    /// Wraps an already built affinity graph.
    ///
    /// Labels must be lower case, as the corpus builder makes them; bridge
    /// search folds only the query words. Checked when debug assertions
    /// are enabled.
    pub fn from_graph(graph: G) -> Self {
        debug_assert!(
            graph.vertices().iter().all(|label| *label == fold_case(label)),
            "graph labels must be lower case"
        );
        let stats = IngestStats {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            ..IngestStats::default()
        };
        Self {
            graph,
            stats,
            options: PoetOptions::default(),
        }
    }

    /// Sets the poem options.
    pub fn with_options(mut self, options: PoetOptions) -> Self {
        self.options = options;
        self
    }

    /// The poem options in effect.
    pub fn options(&self) -> &PoetOptions {
        &self.options
    }

    /// The affinity graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Statistics from building the graph.
    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Finds the bridge word between `first` and `second`.
    ///
    /// A bridge is a word `b` with edges `first -> b` and `b -> second`
    /// (compared case-insensitively). The bridge with the largest summed
    /// weight wins; among equal sums the lexicographically smallest word
    /// wins. A direct edge `first -> second` plays no part.
    pub fn bridge(&self, first: &str, second: &str) -> Option<String> {
        let source = fold_case(first);
        let target = fold_case(second);

        let mut best: Option<(i64, String)> = None;
        for (candidate, first_leg) in self.graph.targets(&source) {
            let second_leg = self.graph.weight(&candidate, &target);
            if second_leg <= 0 {
                continue;
            }
            let total = i64::from(first_leg) + i64::from(second_leg);
            let wins = match &best {
                None => true,
                Some((best_total, best_word)) => {
                    total > *best_total || (total == *best_total && candidate < *best_word)
                }
            };
            if wins {
                best = Some((total, candidate));
            }
        }

        best.map(|(total, word)| {
            log::trace!("bridge {source:?} -> {word:?} -> {target:?} (weight {total})");
            fold_case(&word)
        })
    }

    /// Generates a poem from `input`.
    ///
    /// Each fragment of `input` is rewritten independently: between every
    /// pair of adjacent words the best bridge word, if any, is inserted.
    /// Input words keep their case, words are joined by single spaces, and
    /// every delimiter follows its fragment with no space before it. Text
    /// after the last delimiter follows [`PoetOptions::trailing_text`].
    pub fn poem(&self, input: &str) -> String {
        let mut poem = String::with_capacity(input.len() * 2);
        let mut bridges = 0;

        for segment in segments(input) {
            if segment.delimiter.is_none() && self.options.trailing_text == TrailingText::Drop {
                continue;
            }
            bridges += self.write_fragment(&mut poem, segment.text);
            if let Some(delimiter) = segment.delimiter {
                poem.push(delimiter);
            }
        }

        log::debug!("Poem generated with {bridges} bridge words");
        poem
    }

    /// Appends one bridged fragment to `poem`, returning the bridge count.
    fn write_fragment(&self, poem: &mut String, fragment: &str) -> usize {
        let words = poem_words(fragment);
        let mut bridges = 0;
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                poem.push(' ');
            }
            poem.push_str(word);
            let Some(next) = words.get(i + 1) else {
                continue;
            };
            if let Some(bridge) = self.bridge(word, next) {
                poem.push(' ');
                poem.push_str(&bridge);
                bridges += 1;
            }
        }
        bridges
    }
}
