//! Command dispatch.

use crate::cli::{Args, Command};
use crate::config::{Backend, Config, Settings};
use crate::error::Result;
use affinity_graph::{render, AdjacencyGraph, EdgeListGraph, WeightedGraph};
use affinity_poet::{AffinityPoet, CorpusBuilder};
use std::io::BufRead;

/// Runs the command in `args`, returning what should be printed.
///
/// `stdin` supplies poem input when none is given on the command line.
pub fn run<R: BufRead>(args: &Args, stdin: R) -> Result<String> {
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, config)?;
    tracing::debug!(
        backend = ?settings.backend,
        corpus = %settings.corpus.display(),
        "Resolved settings"
    );

    match settings.backend {
        Backend::Adjacency => {
            execute::<AdjacencyGraph<String>, R>(&settings, &args.command, stdin)
        }
        Backend::Edges => execute::<EdgeListGraph<String>, R>(&settings, &args.command, stdin),
    }
}

/// Loads the corpus into a poet backed by `G`.
pub fn load_poet<G>(settings: &Settings) -> Result<AffinityPoet<G>>
where
    G: WeightedGraph<String> + Default,
{
    let mut builder = CorpusBuilder::new(G::default()).with_segmentation(settings.segmentation);
    builder.add_path(&settings.corpus)?;
    Ok(AffinityPoet::from_builder(builder).with_options(settings.options.clone()))
}

/// Runs `command` against a poet backed by `G`.
pub fn execute<G, R>(settings: &Settings, command: &Command, stdin: R) -> Result<String>
where
    G: WeightedGraph<String> + Default,
    R: BufRead,
{
    let poet = load_poet::<G>(settings)?;

    let output = match command {
        Command::Poem { input } if input.is_empty() => {
            let mut poems = Vec::new();
            for line in stdin.lines() {
                poems.push(poet.poem(&line?));
            }
            poems.join("\n")
        }
        Command::Poem { input } => poet.poem(&input.join(" ")),
        Command::Bridge { first, second } => poet.bridge(first, second).unwrap_or_default(),
        Command::Graph => render(poet.graph()),
        Command::Stats => {
            let stats = poet.stats();
            format!(
                "lines: {}\nfragments: {}\npairs: {}\nvertices: {}\nedges: {}",
                stats.lines, stats.fragments, stats.pairs, stats.vertices, stats.edges
            )
        }
    };
    Ok(output)
}
