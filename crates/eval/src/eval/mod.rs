// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! 2-7 lowball hand evaluator.
//!
//! In 2-7 lowball the best hand is the lowest one, straights and flushes
//! count against a hand, and the ace is always the highest card so that
//! 7-5-4-3-2 of mixed suits is the best hand and A-2-3-4-5 is not a straight.
//!
//! The [Evaluator] precomputes a value for every distinct five cards hand
//! in two lookup tables, one for flushes indexed by the 13 bits ranks mask
//! and one for all other hands indexed by the rank counts (see [pattern]),
//! so that [Evaluator::value] is a table lookup.
//!
//! A [HandValue] is the [HandRank] penalty plus the kickers value, the ranks
//! penalties from best to worst are: high card, one pair, two pair, three of
//! a kind, straight, flush, full house, four of a kind, straight flush.

mod evaluator;
pub use evaluator::Evaluator;

pub mod pattern;
pub use pattern::HAND_SIZE;

mod value;
pub use value::{HandRank, HandValue};
