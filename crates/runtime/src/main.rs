#![deny(clippy::all, clippy::pedantic)]
//! # Platformer Runtime
//!
//! Entry point for the `runtime_main` binary. Logging goes to stderr
//! (`RUST_LOG`, default `info`); one JSON summary per episode goes to stdout.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use runtime::cli::Args;
use runtime::rollout;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    args.validate()?;
    let config = args.run_config()?;
    let level = Arc::new(args.load_level(&config.generator)?);

    tracing::info!(
        episodes = args.episodes,
        seed = args.seed,
        jump_prob = args.jump_prob,
        "Starting rollouts"
    );
    let summaries = rollout::run(level, config.episode, args.episodes, args.seed, args.jump_prob)?;

    let finished = summaries
        .iter()
        .filter(|s| s.termination == Some(rl::TerminationReason::Finished))
        .count();
    tracing::info!(finished, total = summaries.len(), "Rollouts complete");
    for summary in &summaries {
        println!("{}", serde_json::to_string(summary)?);
    }
    Ok(())
}
