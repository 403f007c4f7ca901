// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank patterns and their lookup table indices.
//!
//! A five cards hand is reduced to the ranks it contains. A flush hand has
//! five distinct ranks and is encoded as a 13 bits [FlushKey], any other hand
//! is encoded as a [RankPattern] with the number of cards for each rank.
//!
//! Rank patterns are indexed with the combinatorial number system: the
//! ranks sorted in ascending order `r0 <= r1 <= .. <= r4` are shifted to
//! `c_i = r_i + i`, a strictly increasing 5-subset of `0..17`, and the index
//! is `sum(nck(c_i, i + 1))`. This maps every multiset of five ranks to a
//! distinct index in `0..nck(17, 5)` (see Theorem L pg. 260 Knuth 4a).
use lowball_cards::{Card, Rank};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Max number of cards with the same rank.
const MAX_RANK_COUNT: u8 = 4;

/// Number of rows in the binomials table, indices go up to `12 + 4`.
const NCK_ROWS: usize = Rank::COUNT + HAND_SIZE;

/// Creates table for nck(n, k) for n < 18 and k <= 5.
const fn make_nck() -> [[u32; HAND_SIZE + 1]; NCK_ROWS] {
    let mut t = [[0u32; HAND_SIZE + 1]; NCK_ROWS];
    let mut n = 0;

    while n < NCK_ROWS {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= HAND_SIZE && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; HAND_SIZE + 1]; NCK_ROWS] = make_nck();

/// The number of five ranks multisets, that is nck(13 + 5 - 1, 5).
pub const NUM_PATTERN_INDICES: usize = NCKS[NCK_ROWS - 1][HAND_SIZE] as usize;

/// The number of 13 bits flush keys.
pub const NUM_FLUSH_KEYS: usize = 1 << Rank::COUNT;

/// Returns the binomial coefficient for n choose k.
#[inline]
fn nck(n: usize, k: usize) -> usize {
    NCKS[n][k] as usize
}

/// The number of cards for each rank in a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RankPattern([u8; Rank::COUNT]);

impl RankPattern {
    /// Creates a pattern from the per rank counts, deuce first.
    pub const fn from_counts(counts: [u8; Rank::COUNT]) -> Self {
        Self(counts)
    }

    /// Creates a pattern counting the ranks of the given cards.
    #[inline]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; Rank::COUNT];
        for card in cards {
            counts[card.rank_index()] += 1;
        }

        Self(counts)
    }

    /// The per rank counts, deuce first.
    pub fn counts(&self) -> &[u8; Rank::COUNT] {
        &self.0
    }

    /// The number of cards in this pattern.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }

    /// Checks this pattern can be made with five cards from one deck.
    pub fn is_valid(&self) -> bool {
        self.total() == HAND_SIZE && self.0.iter().all(|&n| n <= MAX_RANK_COUNT)
    }

    /// The rank indices from highest to lowest, each repeated by its count.
    pub fn ranks(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .rev()
            .flat_map(|(rank, &n)| std::iter::repeat_n(rank, n as usize))
    }

    /// The non-flush table index for this pattern.
    ///
    /// Returns `None` if the pattern doesn't have exactly five cards.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        if self.total() != HAND_SIZE {
            return None;
        }

        let mut index = 0;
        let mut pos = 0;
        for (rank, &n) in self.0.iter().enumerate() {
            for _ in 0..n {
                index += nck(rank + pos, pos + 1);
                pos += 1;
            }
        }

        Some(index)
    }
}

/// The ranks of a flush hand as a 13 bits mask, deuce is bit 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlushKey(u16);

impl FlushKey {
    /// Creates a key from a ranks mask, bits above the ace are dropped.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & (NUM_FLUSH_KEYS as u16 - 1))
    }

    /// Creates a key with the ranks of the given cards.
    #[inline]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self(cards.iter().fold(0, |bits, c| bits | (1 << c.rank_index())))
    }

    /// The ranks mask.
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// The flush table index for this key.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The number of distinct ranks in this key.
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The rank pattern for this key, one card per rank.
    pub fn pattern(&self) -> RankPattern {
        let mut counts = [0u8; Rank::COUNT];
        for (rank, n) in counts.iter_mut().enumerate() {
            *n = ((self.0 >> rank) & 1) as u8;
        }

        RankPattern(counts)
    }
}

/// Calls `f` for each key with exactly five ranks, there are 1,287 of them.
pub fn for_each_flush_key<F>(mut f: F)
where
    F: FnMut(FlushKey),
{
    visit_flush_keys(0, 0, 0, &mut f);
}

fn visit_flush_keys<F>(pos: usize, count: usize, bits: u16, f: &mut F)
where
    F: FnMut(FlushKey),
{
    if count == HAND_SIZE {
        f(FlushKey(bits));
        return;
    }

    // Not enough ranks left to make a hand.
    if pos >= Rank::COUNT || count + (Rank::COUNT - pos) < HAND_SIZE {
        return;
    }

    visit_flush_keys(pos + 1, count, bits, f);
    visit_flush_keys(pos + 1, count + 1, bits | (1 << pos), f);
}

/// Calls `f` for each five cards pattern with at most four cards per rank,
/// there are 6,175 of them.
pub fn for_each_rank_pattern<F>(mut f: F)
where
    F: FnMut(&RankPattern),
{
    let mut counts = [0u8; Rank::COUNT];
    visit_rank_patterns(0, HAND_SIZE as u8, &mut counts, &mut f);
}

fn visit_rank_patterns<F>(pos: usize, remaining: u8, counts: &mut [u8; Rank::COUNT], f: &mut F)
where
    F: FnMut(&RankPattern),
{
    if remaining == 0 {
        f(&RankPattern(*counts));
        return;
    }

    if pos >= Rank::COUNT {
        return;
    }

    for n in (0..=remaining.min(MAX_RANK_COUNT)).rev() {
        counts[pos] = n;
        visit_rank_patterns(pos + 1, remaining - n, counts, f);
    }

    counts[pos] = 0;
}
