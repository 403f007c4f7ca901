// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lowball Poker draw simulator.
//!
//! Estimates the hands a player can make by keeping some cards and drawing
//! the rest, each trial draws from the deck without the kept and the dead
//! cards and the outcomes are ranked from best to worst with their
//! percentile:
//!
//! ```
//! # use lowball_drawsim::*;
//! # use lowball_eval::{Evaluator, parse_cards};
//! let eval = Evaluator::new();
//! let kept = parse_cards("8S 7H 6D 3C").unwrap();
//! let dead = parse_cards("KS").unwrap();
//!
//! let sim = DrawSimulator::new(&eval, &kept, &dead, 1).unwrap();
//! let dist = sim.run(20);
//! assert_eq!(dist.len(), 20);
//! assert_eq!(dist.worst().unwrap().percentile, 100.0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use log::info;

use lowball_cards::Card;
use lowball_eval::Evaluator;

mod distribution;
pub use distribution::{Distribution, DrawOutcome};

pub mod simulator;
pub use simulator::{DrawSimulator, SimError};

/// Simulation config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The cards kept in every hand.
    pub kept: Vec<Card>,
    /// The cards out of the deck.
    pub dead: Vec<Card>,
    /// The number of cards drawn in each trial.
    pub draw_count: usize,
    /// The number of trials.
    pub trials: usize,
    /// The number of parallel tasks.
    pub tasks: usize,
    /// Seed for repeatable runs.
    pub seed: Option<u64>,
}

/// Runs the simulation described by the config.
pub fn run(evaluator: &Evaluator, config: &Config) -> Result<Distribution, SimError> {
    let sim = DrawSimulator::new(evaluator, &config.kept, &config.dead, config.draw_count)?;
    let tasks = config.tasks.max(1);

    info!(
        "Running {} trials drawing {} cards with {} tasks",
        config.trials, config.draw_count, tasks
    );

    let dist = match config.seed {
        Some(seed) => sim.par_run_seeded(tasks, config.trials, seed),
        None if tasks == 1 => sim.run(config.trials),
        None => sim.par_run(tasks, config.trials),
    };

    Ok(dist)
}
