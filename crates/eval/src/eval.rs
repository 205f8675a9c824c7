// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator runs a fixed list of category detectors against the
//! whole pool of cards, strongest category first, and the first match
//! wins. Each detector is pure and declines, rather than fails, when the
//! pool cannot contain its category, so a short preflop pool still
//! evaluates down to [TieBreak::HighCard].
//!
//! Every ace also counts as a synthetic low card of value 1 while
//! scanning for straights, so the wheel (A-2-3-4-5) is a straight with
//! top card five.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Rank, Suit};

/// Value the ace takes at the low end of a wheel straight.
const LOW_ACE: u8 = 1;

/// The nine hand categories ordered by poker strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No made hand, plays the highest cards.
    HighCard = 0,
    /// Two cards of one rank.
    OnePair = 1,
    /// Two cards each of two ranks.
    TwoPair = 2,
    /// Three cards of one rank.
    ThreeOfAKind = 3,
    /// Five consecutive ranks.
    Straight = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// Three cards of one rank and two of another.
    FullHouse = 6,
    /// Four cards of one rank.
    FourOfAKind = 7,
    /// Five consecutive ranks of one suit.
    StraightFlush = 8,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High card",
            HandRank::OnePair => "One pair",
            HandRank::TwoPair => "Two pair",
            HandRank::ThreeOfAKind => "Three of a kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full house",
            HandRank::FourOfAKind => "Four of a kind",
            HandRank::StraightFlush => "Straight flush",
        };

        write!(f, "{name}")
    }
}

/// Category specific key that orders hands of the same [HandRank].
///
/// Variants are declared weakest to strongest, matching the [HandRank]
/// order, and their fields compare lexicographically, so the derived
/// ordering compares category first and tiebreak ranks second. Suits
/// never appear in a key, hand strength only depends on ranks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TieBreak {
    /// The up to five highest ranks in the pool, descending.
    HighCard {
        /// Highest pool ranks, descending.
        kickers: Vec<Rank>,
    },
    /// The paired rank, then the up to three highest remaining ranks.
    OnePair {
        /// The paired rank.
        pair: Rank,
        /// Highest remaining ranks, descending.
        kickers: Vec<Rank>,
    },
    /// The two highest paired ranks and the best remaining kicker.
    TwoPair {
        /// The pair ranks, lower pair first then higher pair.
        pairs: (Rank, Rank),
        /// Highest rank outside the two pairs.
        kicker: Rank,
    },
    /// The tripled rank, then the up to two highest remaining ranks.
    ThreeOfAKind {
        /// The tripled rank.
        trips: Rank,
        /// Highest remaining ranks, descending.
        kickers: Vec<Rank>,
    },
    /// The top card of the run, [Rank::Five] for the wheel.
    Straight {
        /// Highest rank in the run.
        high: Rank,
    },
    /// The five highest ranks of the flush suit, descending.
    Flush {
        /// Flush suit ranks, descending; off suit cards never enter.
        ranks: [Rank; 5],
    },
    /// The tripled rank then the paired rank.
    FullHouse {
        /// The tripled rank.
        trips: Rank,
        /// The highest distinct rank with at least a pair.
        pair: Rank,
    },
    /// The quadded rank and the best remaining kicker.
    FourOfAKind {
        /// The quadded rank.
        quads: Rank,
        /// Highest remaining rank, `None` for a bare four card pool.
        kicker: Option<Rank>,
    },
    /// The top card of the suited run, [Rank::Five] for the wheel.
    StraightFlush {
        /// Highest rank in the run.
        high: Rank,
    },
}

impl TieBreak {
    /// Returns the category this key belongs to.
    pub fn rank(&self) -> HandRank {
        match self {
            TieBreak::HighCard { .. } => HandRank::HighCard,
            TieBreak::OnePair { .. } => HandRank::OnePair,
            TieBreak::TwoPair { .. } => HandRank::TwoPair,
            TieBreak::ThreeOfAKind { .. } => HandRank::ThreeOfAKind,
            TieBreak::Straight { .. } => HandRank::Straight,
            TieBreak::Flush { .. } => HandRank::Flush,
            TieBreak::FullHouse { .. } => HandRank::FullHouse,
            TieBreak::FourOfAKind { .. } => HandRank::FourOfAKind,
            TieBreak::StraightFlush { .. } => HandRank::StraightFlush,
        }
    }
}

/// The evaluation of a pool of cards.
///
/// Values are totally ordered, the stronger of two hands compares
/// greater and equal values are a genuine tie, possible when players
/// share community cards. A value is a pure result, it keeps no
/// reference to the cards it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandValue {
    tiebreak: TieBreak,
}

impl HandValue {
    /// Evaluates a pool of cards, the player's hole cards plus the
    /// revealed community cards.
    ///
    /// Any non empty pool evaluates, detectors that need more cards than
    /// the pool holds decline and evaluation falls through to the next
    /// category, terminating at high card.
    ///
    /// Panics on an empty pool, which is a caller contract violation.
    pub fn eval(pool: &[Card]) -> HandValue {
        assert!(!pool.is_empty(), "cannot evaluate an empty pool");

        let tiebreak = straight_flush(pool)
            .or_else(|| four_of_a_kind(pool))
            .or_else(|| full_house(pool))
            .or_else(|| flush(pool))
            .or_else(|| straight(pool))
            .or_else(|| three_of_a_kind(pool))
            .or_else(|| two_pair(pool))
            .or_else(|| one_pair(pool))
            .unwrap_or_else(|| high_card(pool));

        HandValue { tiebreak }
    }

    /// Returns the hand category.
    pub fn rank(&self) -> HandRank {
        self.tiebreak.rank()
    }

    /// Returns the category specific tiebreak key.
    pub fn tiebreak(&self) -> &TieBreak {
        &self.tiebreak
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tiebreak {
            TieBreak::HighCard { kickers } => match kickers.first() {
                Some(high) => write!(f, "High card, {high}"),
                None => write!(f, "High card"),
            },
            TieBreak::OnePair { pair, .. } => write!(f, "Pair of {pair}s"),
            TieBreak::TwoPair { pairs, .. } => {
                write!(f, "Two pair, {}s and {}s", pairs.1, pairs.0)
            }
            TieBreak::ThreeOfAKind { trips, .. } => write!(f, "Three of a kind, {trips}s"),
            TieBreak::Straight { high } => write!(f, "Straight, {high} high"),
            TieBreak::Flush { ranks } => write!(f, "Flush, {} high", ranks[0]),
            TieBreak::FullHouse { trips, pair } => write!(f, "Full house, {trips}s over {pair}s"),
            TieBreak::FourOfAKind { quads, .. } => write!(f, "Four of a kind, {quads}s"),
            TieBreak::StraightFlush { high } => write!(f, "Straight flush, {high} high"),
        }
    }
}

/// Number of cards of each rank, indexed by the rank value.
fn rank_counts(pool: &[Card]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for card in pool {
        counts[card.rank() as usize] += 1;
    }

    counts
}

/// Highest ranks in the pool outside the excluded ranks, descending, at
/// most `n` entries.
fn top_kickers(pool: &[Card], exclude: &[Rank], n: usize) -> Vec<Rank> {
    let mut kickers = pool
        .iter()
        .map(|c| c.rank())
        .filter(|r| !exclude.contains(r))
        .collect::<Vec<_>>();
    kickers.sort_unstable_by(|a, b| b.cmp(a));
    kickers.truncate(n);
    kickers
}

fn straight_flush(pool: &[Card]) -> Option<TieBreak> {
    if pool.len() < 5 {
        return None;
    }

    // Suited values, every ace also enters as a low ace of its suit.
    let mut values = pool
        .iter()
        .map(|c| (c.rank() as u8, c.suit()))
        .collect::<Vec<_>>();
    values.extend(
        pool.iter()
            .filter(|c| c.rank() == Rank::Ace)
            .map(|c| (LOW_ACE, c.suit())),
    );

    // Candidates for the top card, highest first so the best run wins.
    let mut candidates = pool.to_vec();
    candidates.sort_unstable_by(|a, b| b.cmp(a));
    candidates
        .iter()
        .find(|c| {
            let high = c.rank() as u8;
            (1u8..=4).all(|k| high > k && values.contains(&(high - k, c.suit())))
        })
        .map(|c| TieBreak::StraightFlush { high: c.rank() })
}

fn four_of_a_kind(pool: &[Card]) -> Option<TieBreak> {
    let counts = rank_counts(pool);
    let quads = Rank::ranks().rev().find(|r| counts[*r as usize] == 4)?;
    let kicker = top_kickers(pool, &[quads], 1).into_iter().next();
    Some(TieBreak::FourOfAKind { quads, kicker })
}

fn full_house(pool: &[Card]) -> Option<TieBreak> {
    if pool.len() < 5 {
        return None;
    }

    let counts = rank_counts(pool);
    let trips = Rank::ranks().rev().find(|r| counts[*r as usize] >= 3)?;
    let pair = Rank::ranks()
        .rev()
        .find(|r| *r != trips && counts[*r as usize] >= 2)?;
    Some(TieBreak::FullHouse { trips, pair })
}

fn flush(pool: &[Card]) -> Option<TieBreak> {
    if pool.len() < 5 {
        return None;
    }

    let mut suit_counts = [0u8; 4];
    for card in pool {
        suit_counts[card.suit() as usize] += 1;
    }

    let suit = Suit::suits().find(|s| suit_counts[*s as usize] >= 5)?;
    let mut ranks = pool
        .iter()
        .filter(|c| c.suit() == suit)
        .map(|c| c.rank())
        .collect::<Vec<_>>();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    Some(TieBreak::Flush {
        ranks: [ranks[0], ranks[1], ranks[2], ranks[3], ranks[4]],
    })
}

fn straight(pool: &[Card]) -> Option<TieBreak> {
    if pool.len() < 5 {
        return None;
    }

    // Suit blind values, an ace also enters as the low ace.
    let mut values = pool.iter().map(|c| c.rank() as u8).collect::<Vec<_>>();
    if pool.iter().any(|c| c.rank() == Rank::Ace) {
        values.push(LOW_ACE);
    }

    let mut candidates = pool.iter().map(|c| c.rank()).collect::<Vec<_>>();
    candidates.sort_unstable_by(|a, b| b.cmp(a));
    candidates
        .into_iter()
        .find(|r| {
            let high = *r as u8;
            (1u8..=4).all(|k| high > k && values.contains(&(high - k)))
        })
        .map(|high| TieBreak::Straight { high })
}

fn three_of_a_kind(pool: &[Card]) -> Option<TieBreak> {
    let counts = rank_counts(pool);
    let trips = Rank::ranks().rev().find(|r| counts[*r as usize] == 3)?;
    let kickers = top_kickers(pool, &[trips], 2);
    Some(TieBreak::ThreeOfAKind { trips, kickers })
}

fn two_pair(pool: &[Card]) -> Option<TieBreak> {
    if pool.len() < 5 {
        return None;
    }

    // Candidate pair ranks scanned descending, the top two win.
    let counts = rank_counts(pool);
    let mut pairs = Rank::ranks().rev().filter(|r| counts[*r as usize] == 2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    let kicker = top_kickers(pool, &[high, low], 1).into_iter().next()?;
    Some(TieBreak::TwoPair {
        pairs: (low, high),
        kicker,
    })
}

fn one_pair(pool: &[Card]) -> Option<TieBreak> {
    let counts = rank_counts(pool);
    let pair = Rank::ranks().rev().find(|r| counts[*r as usize] == 2)?;
    let kickers = top_kickers(pool, &[pair], 3);
    Some(TieBreak::OnePair { pair, kickers })
}

fn high_card(pool: &[Card]) -> TieBreak {
    TieBreak::HighCard {
        kickers: top_kickers(pool, &[], 5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    fn pool(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&pool(s))
    }

    #[test]
    fn detects_all_categories() {
        assert_eq!(eval("AC KD QH JS 9C").rank(), HandRank::HighCard);
        assert_eq!(eval("AC AD KH QS JC").rank(), HandRank::OnePair);
        assert_eq!(eval("2C 2D 3C 3D AH").rank(), HandRank::TwoPair);
        assert_eq!(eval("QC QD QH KS 2C").rank(), HandRank::ThreeOfAKind);
        assert_eq!(eval("9C 8D 7H 6S 5C").rank(), HandRank::Straight);
        assert_eq!(eval("2H 7H 9H JH AH").rank(), HandRank::Flush);
        assert_eq!(eval("8C 8D 8H 3C 3D").rank(), HandRank::FullHouse);
        assert_eq!(eval("9C 9D 9H 9S AC").rank(), HandRank::FourOfAKind);
        assert_eq!(eval("6S 5S 4S 3S 2S").rank(), HandRank::StraightFlush);
    }

    #[test]
    fn category_ordering_is_total() {
        // Weakest to strongest, each with a strong tiebreak so a higher
        // category always wins on category alone.
        let hands = [
            eval("AC KD QH JS 9C"),
            eval("AC AD KH QS JC"),
            eval("AC AD KH KS QC"),
            eval("AC AD AH KS QC"),
            eval("9C 8D 7H 6S 5C"),
            eval("2H 7H 9H JH AH"),
            eval("2C 2D 2H 3C 3D"),
            eval("2C 2D 2H 2S 3C"),
            eval("6S 5S 4S 3S 2S"),
        ];

        for pair in hands.windows(2) {
            assert!(pair[0] < pair[1], "{} vs {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let value = eval("3S KH 3C 3D 6S KD TS");
        assert_eq!(eval("3S KH 3C 3D 6S KD TS"), value);
    }

    #[test]
    fn evaluation_ignores_pool_order() {
        let mut cards = pool("3S KH 3C 3D 6S KD TS");
        let value = HandValue::eval(&cards);

        let mut rng = rand::rng();
        for _ in 0..20 {
            cards.shuffle(&mut rng);
            assert_eq!(HandValue::eval(&cards), value);
        }
    }

    #[test]
    fn ace_low_straight() {
        let value = eval("AS 2S 3D 4C 5H");
        assert_eq!(value.rank(), HandRank::Straight);
        assert_eq!(value.tiebreak(), &TieBreak::Straight { high: Rank::Five });
    }

    #[test]
    fn ace_low_straight_flush() {
        let value = eval("AS 2S 3S 4S 5S");
        assert_eq!(value.rank(), HandRank::StraightFlush);
        assert_eq!(
            value.tiebreak(),
            &TieBreak::StraightFlush { high: Rank::Five }
        );
    }

    #[test]
    fn straight_picks_highest_run() {
        // Six consecutive ranks, the run topped by the nine wins.
        let value = eval("4C 5D 6H 7S 8C 9D KH");
        assert_eq!(value.tiebreak(), &TieBreak::Straight { high: Rank::Nine });
    }

    #[test]
    fn straight_flush_needs_a_suited_run() {
        // Straight in mixed suits plus a flush in spades, no suited run.
        let value = eval("9C 8S 7S 6S 5S 2S AH");
        assert_eq!(value.rank(), HandRank::Flush);
    }

    #[test]
    fn flush_ignores_off_suit_cards() {
        // The off suit ace must not enter the flush comparison.
        let v1 = eval("KS 2S 3S 7S 6S 9H AC");
        let v2 = eval("TS 4S 3S 7S 6S");

        assert_eq!(v1.rank(), HandRank::Flush);
        assert_eq!(v2.rank(), HandRank::Flush);
        assert_eq!(
            v1.tiebreak(),
            &TieBreak::Flush {
                ranks: [Rank::King, Rank::Seven, Rank::Six, Rank::Trey, Rank::Deuce],
            }
        );
        assert!(v1 > v2);
    }

    #[test]
    fn full_house_trips_then_pair() {
        // Both players fill the treys from the board, the pair decides.
        let board = "3C 3D 6S KD TS";
        let v1 = eval(&format!("3S KH {board}"));
        let v2 = eval(&format!("3H TH {board}"));

        assert_eq!(
            v1.tiebreak(),
            &TieBreak::FullHouse {
                trips: Rank::Trey,
                pair: Rank::King,
            }
        );
        assert_eq!(
            v2.tiebreak(),
            &TieBreak::FullHouse {
                trips: Rank::Trey,
                pair: Rank::Ten,
            }
        );
        assert!(v1 > v2);
    }

    #[test]
    fn full_house_declines_without_distinct_pair() {
        // Trips with no second pair is three of a kind.
        let value = eval("8C 8D 8H KS 2C");
        assert_eq!(value.rank(), HandRank::ThreeOfAKind);
    }

    #[test]
    fn four_of_a_kind_keeps_best_kicker() {
        let value = eval("9C 9D 9H 9S 2C KD 5H");
        assert_eq!(
            value.tiebreak(),
            &TieBreak::FourOfAKind {
                quads: Rank::Nine,
                kicker: Some(Rank::King),
            }
        );
    }

    #[test]
    fn three_of_a_kind_kickers() {
        let value = eval("QC QD QH KS 2C 7D 9H");
        assert_eq!(
            value.tiebreak(),
            &TieBreak::ThreeOfAKind {
                trips: Rank::Queen,
                kickers: vec![Rank::King, Rank::Nine],
            }
        );
    }

    #[test]
    fn two_pair_takes_two_highest_pairs() {
        // Three candidate pairs, the kings and nines play and the third
        // pair supplies the kicker.
        let value = eval("5C 5D 9C 9D KC KD 2H");
        assert_eq!(
            value.tiebreak(),
            &TieBreak::TwoPair {
                pairs: (Rank::Nine, Rank::King),
                kicker: Rank::Five,
            }
        );
    }

    #[test]
    fn two_pair_kicker_comparison() {
        let board = "8C 8D KC KD 4H";
        let v1 = eval(&format!("AS 2C {board}"));
        let v2 = eval(&format!("QS 2D {board}"));

        assert_eq!(v1.rank(), HandRank::TwoPair);
        assert_eq!(v2.rank(), HandRank::TwoPair);
        assert!(v1 > v2);
    }

    #[test]
    fn one_pair_kickers() {
        let value = eval("AC AD KH QS JC 2D 7H");
        assert_eq!(
            value.tiebreak(),
            &TieBreak::OnePair {
                pair: Rank::Ace,
                kickers: vec![Rank::King, Rank::Queen, Rank::Jack],
            }
        );
    }

    #[test]
    fn high_card_top_five() {
        let value = eval("AC KD QH JS 9C 7D 2H");
        assert_eq!(
            value.tiebreak(),
            &TieBreak::HighCard {
                kickers: vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine],
            }
        );
    }

    #[test]
    fn identical_holdings_tie() {
        let board = "2D 5S 9H JD QC";
        let v1 = eval(&format!("8C KH {board}"));
        let v2 = eval(&format!("8C KH {board}"));

        assert_eq!(v1, v2);
        assert!(v1 >= v2 && v1 <= v2);
    }

    #[test]
    fn degenerate_pools_evaluate() {
        // Lone card.
        let value = eval("QD");
        assert_eq!(
            value.tiebreak(),
            &TieBreak::HighCard {
                kickers: vec![Rank::Queen],
            }
        );

        // Two hole cards, no board.
        assert_eq!(eval("QD KH").rank(), HandRank::HighCard);
        assert_eq!(eval("8C 8H").rank(), HandRank::OnePair);

        // Four cards cannot make two pair yet, the best pair plays.
        let value = eval("8C 8H KD KS");
        assert_eq!(
            value.tiebreak(),
            &TieBreak::OnePair {
                pair: Rank::King,
                kickers: vec![Rank::Eight, Rank::Eight],
            }
        );

        // A bare four of a kind has no kicker.
        let value = eval("9C 9D 9H 9S");
        assert_eq!(
            value.tiebreak(),
            &TieBreak::FourOfAKind {
                quads: Rank::Nine,
                kicker: None,
            }
        );
    }

    #[test]
    fn display_rendering() {
        assert_eq!(eval("AC KD QH JS 9C").to_string(), "High card, A");
        assert_eq!(eval("AC AD KH QS JC").to_string(), "Pair of As");
        assert_eq!(eval("2C 2D 3C 3D AH").to_string(), "Two pair, 3s and 2s");
        assert_eq!(eval("QC QD QH KS 2C").to_string(), "Three of a kind, Qs");
        assert_eq!(eval("9C 8D 7H 6S 5C").to_string(), "Straight, 9 high");
        assert_eq!(eval("2H 7H 9H JH AH").to_string(), "Flush, A high");
        assert_eq!(eval("8C 8D 8H 3C 3D").to_string(), "Full house, 8s over 3s");
        assert_eq!(eval("9C 9D 9H 9S AC").to_string(), "Four of a kind, 9s");
        assert_eq!(eval("6S 5S 4S 3S 2S").to_string(), "Straight flush, 6 high");

        assert_eq!(HandRank::FullHouse.to_string(), "Full house");
        assert_eq!(HandRank::HighCard.to_string(), "High card");
    }

    #[test]
    #[should_panic(expected = "empty pool")]
    fn empty_pool_panics() {
        HandValue::eval(&[]);
    }
}
