// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lowball draw simulator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use std::time::Instant;

use lowball_drawsim::Config;
use lowball_eval::{Card, Evaluator};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The kept cards, e.g. 8S,7H,6D,3C.
    #[clap(long, short, value_delimiter = ',')]
    kept: Vec<Card>,
    /// The cards out of the deck, e.g. KS.
    #[clap(long, short, value_delimiter = ',')]
    dead: Vec<Card>,
    /// Number of cards to draw.
    #[clap(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=5))]
    draw: u8,
    /// Number of trials.
    #[clap(long, short, default_value_t = 10_000)]
    trials: usize,
    /// Number of parallel tasks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for repeatable runs.
    #[clap(long)]
    seed: Option<u64>,
    /// Print all the outcomes.
    #[clap(long, short)]
    all: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config {
        kept: cli.kept,
        dead: cli.dead,
        draw_count: cli.draw as usize,
        trials: cli.trials,
        tasks: cli.tasks as usize,
        seed: cli.seed,
    };

    let now = Instant::now();
    let evaluator = Evaluator::new();
    let dist = lowball_drawsim::run(&evaluator, &config).context("Invalid cards")?;
    info!("Simulation completed in {:.3}s", now.elapsed().as_secs_f64());

    if dist.is_empty() {
        bail!(
            "Cannot make a hand keeping {} cards and drawing {}",
            config.kept.len(),
            config.draw_count
        );
    }

    report::print(&config, &dist, cli.all);
    Ok(())
}
