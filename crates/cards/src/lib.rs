// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lowball Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use lowball_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use lowball_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample one card from a deck without the cards already in use:
//!
//! ```
//! # use lowball_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::default();
//! deck.remove(Card::new(Rank::King, Suit::Spades));
//!
//! let cards = deck.sample(&mut rand::rng(), 1);
//! assert_eq!(cards.len(), 1);
//! assert_ne!(cards[0], Card::new(Rank::King, Suit::Spades));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
