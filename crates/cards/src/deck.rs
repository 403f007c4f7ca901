// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is stored in a single byte with the following format:
///
/// ```text
///   +--------+
///   |xxrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// so that ids go from 0 (2C) to 51 (AS) and cards sort by rank first.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// Creates a card from its id, returns `None` if `id >= 52`.
    pub const fn from_id(id: u8) -> Option<Card> {
        if (id as usize) < Deck::SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    /// This card unique id in the range 0..52.
    pub const fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::SUITS[self.suit_index()]
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::RANKS[self.rank_index()]
    }

    /// Returns the rank index, deuce is 0 and ace is 12.
    #[inline]
    pub const fn rank_index(&self) -> usize {
        (self.0 >> 2) as usize
    }

    /// Returns the suit index in the range 0..4.
    #[inline]
    pub const fn suit_index(&self) -> usize {
        (self.0 & 0x3) as usize
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card like `AS`, `td`, `10h` or `7♦`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let suit = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank = chars.as_str().parse::<Rank>()?;
        let suit = Suit::try_from(suit)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by commas or whitespace.
///
/// ```
/// # use lowball_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("8S, 7h 6D,3c").unwrap();
/// assert_eq!(cards.len(), 4);
/// assert_eq!(cards[0], Card::new(Rank::Eight, Suit::Spades));
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Error returned when parsing a card from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input string has no characters.
    #[error("empty card")]
    Empty,
    /// The rank part is not one of 2-9, T, J, Q, K, A.
    #[error("invalid card rank '{0}'")]
    InvalidRank(String),
    /// The suit character is not one of C, D, H, S.
    #[error("invalid card suit '{0}'")]
    InvalidSuit(char),
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    const RANKS: [Rank; Self::COUNT] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::RANKS.into_iter()
    }

    /// Returns the rank for an index in 0..13.
    pub fn from_index(idx: usize) -> Option<Rank> {
        Self::RANKS.get(idx).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "" => return Err(ParseCardError::Empty),
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::SUITS.into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' | 'c' | '♣' => Ok(Suit::Clubs),
            'D' | 'd' | '♦' => Ok(Suit::Diamonds),
            'H' | 'h' | '♥' => Ok(Suit::Hearts),
            'S' | 's' | '♠' => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(c)),
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// The cards left in the deck.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Samples `k` distinct cards without removing them from the deck.
    ///
    /// Returns fewer than `k` cards if the deck has fewer than `k` cards.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, k: usize) -> Vec<Card> {
        self.cards.choose_multiple(rng, k).copied().collect()
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let mut hand = [Card::new(Rank::Ace, Suit::Spades); 5];
        self.visit_hands(0, 0, &mut hand[..k], &mut f);
    }

    fn visit_hands<F>(&self, start: usize, depth: usize, hand: &mut [Card], f: &mut F)
    where
        F: FnMut(&[Card]),
    {
        if depth == hand.len() {
            f(hand);
            return;
        }

        // Leave enough cards for the positions after this one.
        let last = self.cards.len() - (hand.len() - depth);
        for idx in start..=last {
            hand[depth] = self.cards[idx];
            self.visit_hands(idx + 1, depth + 1, hand, f);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card.rank_index(), card.rank() as usize);
            assert_eq!(card.suit_index(), card.suit() as usize);
            assert_eq!(Card::from_id(card.id()), Some(card));
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(cards.iter().all(|&id| (id as usize) < Deck::SIZE));
        assert_eq!(Card::from_id(52), None);

        let two_clubs = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(two_clubs.id(), 0);

        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(ace_spades.id(), 51);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        assert_eq!("KD".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("ks".parse(), Ok(Card::new(Rank::King, Suit::Spades)));
        assert_eq!("10h".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!(" 2c ".parse(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));
        assert_eq!("7♦".parse(), Ok(Card::new(Rank::Seven, Suit::Diamonds)));

        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("S".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!(
            "1S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!("KX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));

        // Round trip every card through its text form.
        for card in Deck::default() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }

    #[test]
    fn cards_list() {
        let cards = parse_cards("8S,7H 6D , 3C").unwrap();
        let expected = [
            Card::new(Rank::Eight, Suit::Spades),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Six, Suit::Diamonds),
            Card::new(Rank::Trey, Suit::Clubs),
        ];
        assert_eq!(cards, expected);

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("8S 7Z").is_err());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(1, |cards| {
            assert_eq!(cards.len(), 1);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 52);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);
        assert!(!deck.contains(Card::new(Rank::King, Suit::Diamonds)));
        assert!(deck.contains(Card::new(Rank::King, Suit::Spades)));

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert_eq!(cards.len(), 4);
            count += 1;
        });
        assert_eq!(count, 230_300);

        // Not enough cards.
        let mut deck = Deck::default();
        while deck.count() > 3 {
            deck.deal();
        }

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn deck_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::King, Suit::Spades));

        for _ in 0..100 {
            let cards = deck.sample(&mut rng, 5);
            assert_eq!(cards.len(), 5);
            assert!(cards.iter().all(|c| deck.contains(*c)));

            let distinct = cards.iter().collect::<HashSet<_>>();
            assert_eq!(distinct.len(), 5);
        }

        // Sampling doesn't consume the deck.
        assert_eq!(deck.count(), 51);
        assert_eq!(deck.sample(&mut rng, 60).len(), 51);
    }
}
