// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values and ranks.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::pattern::{FlushKey, HAND_SIZE, RankPattern};

/// Value distance between two hand ranks, larger than any kickers value.
const RANK_STEP: u64 = 1_000_000;

/// Kickers base, each rank weight is in 1..=13.
const KICKER_BASE: u64 = 14;

/// The rank of a hand, from best to worst in 2-7 lowball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, no straight, no flush.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks, ace is only high.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight of the same suit.
    StraightFlush,
}

impl HandRank {
    /// The number of hand ranks.
    pub const COUNT: usize = 9;

    const RANKS: [HandRank; Self::COUNT] = {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
    };

    /// Returns all ranks from best to worst.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        Self::RANKS.into_iter()
    }

    /// The value penalty for a hand with this rank.
    pub const fn penalty(self) -> u64 {
        self as u64 * RANK_STEP
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The value of a 2-7 lowball hand, a lower value is a better hand.
///
/// A value is the hand rank penalty plus the kickers value, the kickers are
/// the hand ranks from highest to lowest taken as base 14 digits with deuce
/// worth 1 and ace worth 13 so that the highest card is the most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue(u64);

impl HandValue {
    /// The value for an invalid hand, worse than any valid hand.
    pub const INVALID: HandValue = HandValue(u64::MAX);

    /// Creates a value for the given rank and rank indices sorted from
    /// highest to lowest.
    fn new(rank: HandRank, ranks: &[usize; HAND_SIZE]) -> Self {
        let kickers = ranks
            .iter()
            .fold(0, |acc, &r| acc * KICKER_BASE + r as u64 + 1);
        Self(rank.penalty() + kickers)
    }

    /// The value of a flush hand with the given ranks.
    pub(crate) fn from_flush_key(key: FlushKey) -> Self {
        let ranks = hand_ranks(&key.pattern());
        let rank = if is_straight(&ranks) {
            HandRank::StraightFlush
        } else {
            HandRank::Flush
        };

        Self::new(rank, &ranks)
    }

    /// The value of a non-flush hand with the given ranks.
    pub(crate) fn from_rank_pattern(pattern: &RankPattern) -> Self {
        let ranks = hand_ranks(pattern);
        let mut rank = multiples_rank(pattern);
        if is_straight(&ranks) {
            rank = rank.max(HandRank::Straight);
        }

        Self::new(rank, &ranks)
    }

    /// The numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Checks this is the value of a valid hand.
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }

    /// The hand rank, `None` for an invalid hand.
    pub fn rank(&self) -> Option<HandRank> {
        HandRank::RANKS.get((self.0 / RANK_STEP) as usize).copied()
    }

    /// The kickers part of the value.
    pub fn kickers(&self) -> u64 {
        self.0 % RANK_STEP
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "invalid")
        }
    }
}

/// The five rank indices from highest to lowest.
fn hand_ranks(pattern: &RankPattern) -> [usize; HAND_SIZE] {
    let mut ranks = [0; HAND_SIZE];
    for (slot, rank) in ranks.iter_mut().zip(pattern.ranks()) {
        *slot = rank;
    }

    ranks
}

/// Five consecutive ranks, there is no wrap around so A-2-3-4-5 is not a straight.
fn is_straight(ranks: &[usize; HAND_SIZE]) -> bool {
    ranks.windows(2).all(|w| w[0] == w[1] + 1)
}

/// The hand rank given by cards with the same rank.
fn multiples_rank(pattern: &RankPattern) -> HandRank {
    let (mut pairs, mut trips, mut quads) = (0, 0, 0);
    for &n in pattern.counts() {
        match n {
            2 => pairs += 1,
            3 => trips += 1,
            4 => quads += 1,
            _ => {}
        }
    }

    match (quads, trips, pairs) {
        (q, _, _) if q > 0 => HandRank::FourOfAKind,
        (_, t, p) if t > 0 && p > 0 => HandRank::FullHouse,
        (_, t, _) if t > 0 => HandRank::ThreeOfAKind,
        (_, _, 2) => HandRank::TwoPair,
        (_, _, 1) => HandRank::OnePair,
        _ => HandRank::HighCard,
    }
}
