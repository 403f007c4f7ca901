// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lowball Poker hand evaluator.
//!
//! Poker hand evaluator for 5 cards 2-7 lowball hands, where the lowest hand
//! wins. The evaluator builds two lookup tables when created, one for flush
//! hands and one for all other hands, and evaluates a hand with a single
//! table lookup.
//!
//! To use the evaluator create an [Evaluator] and use it to get a
//! [HandValue] for a hand, a lower value is a better hand:
//!
//! ```
//! # use lowball_eval::*;
//! let eval = Evaluator::new();
//!
//! let seven_low = parse_cards("7S 5H 4D 3C 2S").unwrap();
//! let pair = parse_cards("2S 2H 3D 4C 5S").unwrap();
//! assert!(eval.value(&seven_low) < eval.value(&pair));
//! assert_eq!(eval.rank(&pair), Some(HandRank::OnePair));
//!
//! // A hand that doesn't have five cards is worse than any hand.
//! assert_eq!(eval.value(&pair[..4]), HandValue::INVALID);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Evaluator, HAND_SIZE, HandRank, HandValue};

// Reexport cards types.
pub use lowball_cards::{Card, Deck, Rank, Suit, parse_cards};
