// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables evaluator.
use log::debug;
use std::fmt;

use lowball_cards::Card;

use super::{
    pattern::{
        self, FlushKey, HAND_SIZE, NUM_FLUSH_KEYS, NUM_PATTERN_INDICES, RankPattern,
    },
    value::{HandRank, HandValue},
};

/// A 2-7 lowball hand evaluator.
///
/// The evaluator owns two lookup tables computed when it is created, one for
/// flush hands indexed by [FlushKey] and one for all other hands indexed by
/// [RankPattern::index]. The tables are never changed after creation so an
/// evaluator can be shared between threads.
pub struct Evaluator {
    flush: Box<[HandValue]>,
    non_flush: Box<[HandValue]>,
}

impl Evaluator {
    /// Creates an evaluator and fills its lookup tables.
    pub fn new() -> Self {
        let mut flush = vec![HandValue::INVALID; NUM_FLUSH_KEYS].into_boxed_slice();
        let mut flush_count = 0;
        pattern::for_each_flush_key(|key| {
            flush[key.index()] = HandValue::from_flush_key(key);
            flush_count += 1;
        });

        let mut non_flush = vec![HandValue::INVALID; NUM_PATTERN_INDICES].into_boxed_slice();
        let mut non_flush_count = 0;
        pattern::for_each_rank_pattern(|pattern| {
            // Enumerated patterns always have five cards.
            if let Some(idx) = pattern.index() {
                debug_assert!(!non_flush[idx].is_valid(), "index {idx} written twice");
                non_flush[idx] = HandValue::from_rank_pattern(pattern);
                non_flush_count += 1;
            }
        });

        debug!(
            "Evaluator tables filled flush {flush_count}/{} non-flush {non_flush_count}/{}",
            flush.len(),
            non_flush.len()
        );

        Self { flush, non_flush }
    }

    /// Returns the value of a five cards hand, lower is better.
    ///
    /// Returns [HandValue::INVALID] if the hand doesn't have five cards.
    #[inline]
    pub fn value(&self, cards: &[Card]) -> HandValue {
        if cards.len() != HAND_SIZE {
            return HandValue::INVALID;
        }

        let suit = cards[0].suit_index();
        if cards[1..].iter().all(|c| c.suit_index() == suit) {
            self.flush[FlushKey::from_cards(cards).index()]
        } else {
            RankPattern::from_cards(cards)
                .index()
                .map_or(HandValue::INVALID, |idx| self.non_flush[idx])
        }
    }

    /// Returns the rank of a five cards hand, `None` for an invalid hand.
    pub fn rank(&self, cards: &[Card]) -> Option<HandRank> {
        self.value(cards).rank()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("flush", &self.flush.len())
            .field("non_flush", &self.non_flush.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::{HashMap, HashSet};
    use lowball_cards::{Deck, Rank, Suit, parse_cards};

    fn hand(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn tables_filled() {
        let eval = Evaluator::new();
        assert_eq!(eval.flush.iter().filter(|v| v.is_valid()).count(), 1_287);
        assert_eq!(eval.non_flush.iter().filter(|v| v.is_valid()).count(), 6_175);

        // Building twice gives the same tables.
        let other = Evaluator::default();
        assert_eq!(eval.flush, other.flush);
        assert_eq!(eval.non_flush, other.non_flush);
    }

    #[test]
    fn invalid_hand_size() {
        let eval = Evaluator::new();
        assert_eq!(eval.value(&[]), HandValue::INVALID);
        assert_eq!(eval.value(&hand("7S 5H 4D 3C")), HandValue::INVALID);
        assert_eq!(eval.value(&hand("7S 5H 4D 3C 2S 8S")), HandValue::INVALID);
        assert_eq!(eval.rank(&hand("7S 5H 4D 3C")), None);

        // Repeated cards never reach a written slot.
        assert_eq!(eval.value(&hand("AS AS AS AS AS")), HandValue::INVALID);
        assert_eq!(eval.value(&hand("AS AS KS QS JS")), HandValue::INVALID);
    }

    #[test]
    fn best_hand() {
        let eval = Evaluator::new();

        // All distinct ranks sets with mixed suits.
        let mut best = None;
        pattern::for_each_flush_key(|key| {
            let cards = key
                .pattern()
                .ranks()
                .zip([Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs])
                .map(|(r, s)| Card::new(Rank::from_index(r).unwrap(), s))
                .collect::<Vec<_>>();
            let value = eval.value(&cards);
            if best.as_ref().is_none_or(|(v, _)| value < *v) {
                best = Some((value, cards));
            }
        });

        let (value, cards) = best.unwrap();
        assert_eq!(value, eval.value(&hand("7S 5H 4D 3C 2S")));
        assert_eq!(value.rank(), Some(HandRank::HighCard));
        assert_eq!(
            RankPattern::from_cards(&cards),
            RankPattern::from_cards(&hand("7C 5C 4C 3C 2C"))
        );
    }

    #[test]
    fn hands_order() {
        let eval = Evaluator::new();

        // From best to worst.
        let hands = [
            "7S 5H 4D 3C 2S",
            "8S 5H 4D 3C 2S",
            "8S 6H 4D 3C 2S",
            "KS QH JD 9C 8S",
            "AS 2H 3D 4C 5S",
            "AS KH QD JC 9S",
            "2S 2H 3D 4C 5S",
            "3S 3H 4D 5C 6S",
            "2S 2H KD QC JS",
            "KS KH 2D 3C 4S",
            "3S 3H AD KC QS",
            "AS AH 2D 3C 4S",
            "2S 2H 3D 3C 4S",
            "KS KH QD QC 2S",
            "2S 2H 2D 3C 4S",
            "KS KH KD 2C 3S",
            "2S 3H 4D 5C 6S",
            "9S TH JD QC KS",
            "TS JH QD KC AS",
            "2S 3S 4S 5S 7S",
            "AS 2S 3S 4S 5S",
            "AH KH QH JH 9H",
            "2S 2H 2D 3H 3S",
            "AS AH AD KH KS",
            "2S 2H 2D 2C 3S",
            "AS AH AD AC KS",
            "2S 3S 4S 5S 6S",
            "TH JH QH KH AH",
        ];

        let values = hands
            .iter()
            .map(|h| (h, eval.value(&hand(h))))
            .collect::<Vec<_>>();

        for w in values.windows(2) {
            assert!(w[0].1 < w[1].1, "{} should be better than {}", w[0].0, w[1].0);
        }

        assert!(values.iter().all(|(_, v)| *v < HandValue::INVALID));
    }

    #[test]
    fn pair_kickers() {
        let eval = Evaluator::new();
        let low_kickers = eval.value(&hand("2S 2H 3D 4C 5S"));
        let high_kickers = eval.value(&hand("2S 2H KD QC JS"));
        let kings = eval.value(&hand("KS KH 2D 3C 4S"));

        assert!(low_kickers < high_kickers);
        assert!(high_kickers < kings);
        assert_eq!(low_kickers.rank(), Some(HandRank::OnePair));
        assert_eq!(kings.rank(), Some(HandRank::OnePair));
    }

    #[test]
    fn ace_is_worst_card() {
        let eval = Evaluator::new();
        let ace = eval.value(&hand("AS 3H 7D 9C KS"));
        let king = eval.value(&hand("KS 3H 7D 9C JS"));
        assert!(ace > king);
        assert_eq!(ace.rank(), Some(HandRank::HighCard));
        assert_eq!(king.rank(), Some(HandRank::HighCard));
    }

    #[test]
    fn no_wheel() {
        let eval = Evaluator::new();
        let wheel = eval.value(&hand("AS 2H 3D 4C 5S"));
        assert_eq!(wheel.rank(), Some(HandRank::HighCard));

        // Worse than any king high, better than any pair.
        assert!(wheel > eval.value(&hand("KS QH JD TC 8S")));
        assert!(wheel < eval.value(&hand("2S 2H 3D 4C 5S")));

        let suited = eval.value(&hand("AH 2H 3H 4H 5H"));
        assert_eq!(suited.rank(), Some(HandRank::Flush));
    }

    #[test]
    fn suits_ignored_for_non_flush() {
        let eval = Evaluator::new();
        let h1 = eval.value(&hand("2S 2H 3S 4S 5S"));
        let h2 = eval.value(&hand("2S 2H 3H 4H 5H"));
        let h3 = eval.value(&hand("5D 4C 3C 2D 2C"));
        assert_eq!(h1, h2);
        assert_eq!(h1, h3);

        // Same ranks, one flush.
        let flush = eval.value(&hand("7H 5H 4H 3H 2H"));
        let no_flush = eval.value(&hand("7H 5H 4H 3H 2S"));
        assert_eq!(flush.rank(), Some(HandRank::Flush));
        assert_eq!(no_flush.rank(), Some(HandRank::HighCard));
        assert_eq!(flush.kickers(), no_flush.kickers());
    }

    #[test]
    fn shared_between_threads() {
        let eval = Evaluator::new();
        let cards = hand("8S 7H 6D 3C 2S");
        let expected = eval.value(&cards);

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(eval.value(&cards), expected));
            }
        });
    }

    #[test]
    fn all_hands() {
        let eval = Evaluator::new();
        let mut counts = [0usize; HandRank::COUNT];
        let mut ranges = HashMap::<HandRank, (HandValue, HandValue)>::default();
        let mut values = HashSet::default();

        Deck::default().for_each(5, |cards| {
            let value = eval.value(cards);
            let rank = value.rank().expect("valid hand");
            counts[rank as usize] += 1;
            values.insert(value);

            let range = ranges.entry(rank).or_insert((value, value));
            range.0 = range.0.min(value);
            range.1 = range.1.max(value);
        });

        assert_eq!(
            counts,
            [1_303_560, 1_098_240, 123_552, 54_912, 9_180, 5_112, 3_744, 624, 36]
        );

        // One value for each distinct hand.
        assert_eq!(values.len(), 7_462);

        // Any hand is better than all the hands with a worse rank.
        let ranks = HandRank::ranks().collect::<Vec<_>>();
        for w in ranks.windows(2) {
            let (_, worst) = ranges[&w[0]];
            let (best, _) = ranges[&w[1]];
            assert!(worst < best, "{} < {}", w[0], w[1]);
        }

        assert_eq!(ranges[&HandRank::HighCard].0, eval.value(&hand("7S 5H 4D 3C 2S")));
        assert_eq!(
            ranges[&HandRank::StraightFlush].1,
            eval.value(&hand("AS KS QS JS TS"))
        );
    }
}
