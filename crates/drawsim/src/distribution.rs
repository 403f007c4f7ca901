// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranked draw outcomes.
use serde::{Deserialize, Serialize};

use lowball_cards::Card;
use lowball_eval::{HAND_SIZE, HandRank, HandValue};

/// The hand made by one draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// The kept cards followed by the drawn cards.
    pub hand: [Card; HAND_SIZE],
    /// The hand value.
    pub value: HandValue,
    /// The percentage of outcomes as good as or better than this one.
    pub percentile: f64,
}

/// Draw outcomes sorted from best to worst.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Distribution {
    outcomes: Vec<DrawOutcome>,
}

impl Distribution {
    /// Sorts the hands by value and assigns each one its percentile.
    pub(crate) fn from_hands(mut hands: Vec<([Card; HAND_SIZE], HandValue)>) -> Self {
        // Stable sort, equal values keep their draw order.
        hands.sort_by_key(|(_, value)| *value);

        let total = hands.len() as f64;
        let outcomes = hands
            .into_iter()
            .enumerate()
            .map(|(idx, (hand, value))| DrawOutcome {
                hand,
                value,
                percentile: (idx + 1) as f64 / total * 100.0,
            })
            .collect();

        Self { outcomes }
    }

    /// The number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Checks if there are no outcomes.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// The outcomes from best to worst.
    pub fn outcomes(&self) -> &[DrawOutcome] {
        &self.outcomes
    }

    /// Iterates the outcomes from best to worst.
    pub fn iter(&self) -> std::slice::Iter<'_, DrawOutcome> {
        self.outcomes.iter()
    }

    /// The best outcome.
    pub fn best(&self) -> Option<&DrawOutcome> {
        self.outcomes.first()
    }

    /// The worst outcome.
    pub fn worst(&self) -> Option<&DrawOutcome> {
        self.outcomes.last()
    }

    /// The outcome at the given percentile in 0..=100.
    pub fn at_percentile(&self, percentile: f64) -> Option<&DrawOutcome> {
        let last = self.outcomes.len().checked_sub(1)?;
        let idx = (percentile.clamp(0.0, 100.0) * self.outcomes.len() as f64 / 100.0) as usize;
        self.outcomes.get(idx.min(last))
    }

    /// The number of outcomes for each hand rank, indexed by [HandRank].
    pub fn rank_counts(&self) -> [usize; HandRank::COUNT] {
        let mut counts = [0; HandRank::COUNT];
        for rank in self.outcomes.iter().filter_map(|o| o.value.rank()) {
            counts[rank as usize] += 1;
        }

        counts
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a DrawOutcome;
    type IntoIter = std::slice::Iter<'a, DrawOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
