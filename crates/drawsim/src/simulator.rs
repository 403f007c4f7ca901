// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw simulator.
use ahash::AHashSet;
use log::{debug, warn};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::{panic, thread};
use thiserror::Error;

use lowball_cards::{Card, Deck};
use lowball_eval::{Evaluator, HAND_SIZE, HandValue};

use crate::Distribution;

/// Simulator setup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A card is listed more than once in the kept or dead cards.
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
}

/// Simulates drawing cards to complete a hand.
///
/// Each trial draws `draw_count` cards from the deck without the kept and
/// dead cards and evaluates them together with the kept cards.
#[derive(Debug)]
pub struct DrawSimulator<'a> {
    /// The shared hand evaluator.
    evaluator: &'a Evaluator,
    /// The cards kept in every hand.
    kept: Vec<Card>,
    /// The number of cards drawn in each trial.
    draw_count: usize,
    /// The cards that can be drawn.
    pool: Deck,
}

impl<'a> DrawSimulator<'a> {
    /// Creates a simulator, fails if a card is kept or dead more than once.
    pub fn new(
        evaluator: &'a Evaluator,
        kept: &[Card],
        dead: &[Card],
        draw_count: usize,
    ) -> Result<Self, SimError> {
        let mut used = AHashSet::with_capacity(kept.len() + dead.len());
        let mut pool = Deck::default();

        for &card in kept.iter().chain(dead) {
            if !used.insert(card) {
                return Err(SimError::DuplicateCard(card));
            }

            pool.remove(card);
        }

        Ok(Self {
            evaluator,
            kept: kept.to_vec(),
            draw_count,
            pool,
        })
    }

    /// The kept cards.
    pub fn kept(&self) -> &[Card] {
        &self.kept
    }

    /// The number of cards drawn in each trial.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// The cards that can be drawn.
    pub fn pool(&self) -> &Deck {
        &self.pool
    }

    /// Checks that a trial can make a five cards hand.
    pub fn can_make_hand(&self) -> bool {
        self.kept.len() + self.draw_count == HAND_SIZE && self.draw_count <= self.pool.count()
    }

    /// Runs `trials` draws using the thread local generator.
    pub fn run(&self, trials: usize) -> Distribution {
        self.run_with_rng(&mut rand::rng(), trials)
    }

    /// Runs `trials` draws using the given generator.
    ///
    /// Trials that don't make a five cards hand are not recorded.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R, trials: usize) -> Distribution {
        if !self.check_hand_size() {
            return Distribution::default();
        }

        let hands = (0..trials)
            .filter_map(|_| self.trial(rng))
            .collect::<Vec<_>>();

        debug!("Recorded {} of {trials} trials", hands.len());
        Distribution::from_hands(hands)
    }

    /// Runs `trials` draws split between `num_tasks` parallel tasks, each
    /// task uses its own generator seeded by the OS.
    ///
    /// Panics if `num_tasks` is zero.
    pub fn par_run(&self, num_tasks: usize, trials: usize) -> Distribution {
        self.par_trials(num_tasks, trials, |_| SmallRng::from_os_rng())
    }

    /// Same as [DrawSimulator::par_run] with each task generator seeded
    /// from `seed` so that runs can be repeated.
    pub fn par_run_seeded(&self, num_tasks: usize, trials: usize, seed: u64) -> Distribution {
        self.par_trials(num_tasks, trials, |task_id| {
            SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64))
        })
    }

    fn par_trials<F>(&self, num_tasks: usize, trials: usize, make_rng: F) -> Distribution
    where
        F: Fn(usize) -> SmallRng + Sync,
    {
        assert!(num_tasks > 0);

        if !self.check_hand_size() {
            return Distribution::default();
        }

        let hands = thread::scope(|s| {
            let tasks = (0..num_tasks)
                .map(|task_id| {
                    // The first tasks take the remainder.
                    let count = trials / num_tasks + usize::from(task_id < trials % num_tasks);
                    let make_rng = &make_rng;
                    s.spawn(move || {
                        let mut rng = make_rng(task_id);
                        let hands = (0..count)
                            .filter_map(|_| self.trial(&mut rng))
                            .collect::<Vec<_>>();
                        debug!("Task {task_id} recorded {} of {count} trials", hands.len());
                        hands
                    })
                })
                .collect::<Vec<_>>();

            tasks
                .into_iter()
                .flat_map(|task| task.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        });

        Distribution::from_hands(hands)
    }

    fn check_hand_size(&self) -> bool {
        let ok = self.can_make_hand();
        if !ok {
            warn!(
                "Cannot make a {HAND_SIZE} cards hand with {} kept cards and {} drawn from {}",
                self.kept.len(),
                self.draw_count,
                self.pool.count()
            );
        }

        ok
    }

    fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<([Card; HAND_SIZE], HandValue)> {
        let mut cards = Vec::with_capacity(HAND_SIZE);
        cards.extend_from_slice(&self.kept);
        cards.extend(self.pool.sample(rng, self.draw_count));

        let hand: [Card; HAND_SIZE] = cards.try_into().ok()?;
        Some((hand, self.evaluator.value(&hand)))
    }
}
