#![forbid(unsafe_code)]

//! Poet CLI
//!
//! Writes poems by bridging words with what a corpus puts between them.

use affinity_cli::Args;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so poems can be piped.
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = affinity_cli::run(&args, std::io::stdin().lock())?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
