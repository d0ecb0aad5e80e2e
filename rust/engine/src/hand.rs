//! Best-of-N poker hand evaluation.
//!
//! [`evaluate_best_hand`] takes 5, 6 or 7 cards, ranks every 5-card subset and
//! keeps the strongest. Hands compare through [`HandScore`], a category plus
//! a tie-break vector ordered lexicographically.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::EngineError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

/// Total order over hands: category first, then tie-break entries high to low.
/// Unused tie-break slots are zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandScore {
    pub category: Category,
    pub tie_break: [u8; 5],
}

impl HandScore {
    /// The same order as a single integer: category in bits 20..24, then one
    /// nibble per tie-break slot. Rank values never exceed 14.
    pub fn packed(&self) -> u32 {
        self.tie_break
            .iter()
            .fold(u32::from(self.category.value()), |acc, &r| (acc << 4) | u32::from(r & 0xf))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRanking {
    pub category: Category,
    // ordered high -> low for tiebreaks
    pub tie_break: Vec<u8>,
    pub label: String,
    /// The five cards making the hand.
    pub best_five: [Card; 5],
}

impl HandRanking {
    pub fn score(&self) -> HandScore {
        let mut tie_break = [0u8; 5];
        for (slot, &r) in tie_break.iter_mut().zip(&self.tie_break) {
            *slot = r;
        }
        HandScore {
            category: self.category,
            tie_break,
        }
    }

    pub fn is_royal_flush(&self) -> bool {
        self.category == Category::StraightFlush && self.tie_break.first() == Some(&14)
    }
}

pub fn compare_hands(a: &HandRanking, b: &HandRanking) -> Ordering {
    a.score().cmp(&b.score())
}

/// Ranks the best five-card hand out of 5 to 7 distinct cards.
///
/// ```
/// use fairdeal_engine::cards::parse_cards;
/// use fairdeal_engine::hand::{evaluate_best_hand, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
/// let ranking = evaluate_best_hand(&cards).unwrap();
/// assert_eq!(ranking.category, Category::StraightFlush);
/// assert_eq!(ranking.label, "Royal flush");
/// ```
pub fn evaluate_best_hand(cards: &[Card]) -> Result<HandRanking, EngineError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EngineError::InvalidCardCount { count: cards.len() });
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(EngineError::DuplicateCard(*card));
        }
    }

    let n = cards.len();
    let mut best: Option<(HandScore, HandRanking)> = None;
    // Every 5-bit subset of the input, in increasing mask order.
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        let mut five = [cards[0]; 5];
        let mut k = 0;
        for (i, &c) in cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                five[k] = c;
                k += 1;
            }
        }
        let ranking = rank_five(five);
        let score = ranking.score();
        // Strictly greater: the first maximum wins ties between subsets.
        if best.as_ref().is_none_or(|(s, _)| score > *s) {
            best = Some((score, ranking));
        }
    }
    best.map(|(_, r)| r)
        .ok_or(EngineError::InvalidCardCount { count: n })
}

fn rank_five(cards: [Card; 5]) -> HandRanking {
    let mut ranks: [Rank; 5] = cards.map(|c| c.rank);
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let first_suit: Suit = cards[0].suit;
    let is_flush = cards.iter().all(|c| c.suit == first_suit);
    let straight_top = detect_straight_high(&ranks);

    // Rank groups ordered by (count desc, rank desc).
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(5);
    for &r in &ranks {
        match groups.iter_mut().find(|(_, g)| *g == r) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_by(|a, b| b.cmp(a));

    let high = ranks[0];
    let (category, tie, label) = match (is_flush, straight_top, groups.as_slice()) {
        (true, Some(Rank::Ace), _) => (
            Category::StraightFlush,
            vec![Rank::Ace],
            "Royal flush".to_string(),
        ),
        (true, Some(top), _) => (
            Category::StraightFlush,
            vec![top],
            format!("Straight flush ({}-high)", top.name()),
        ),
        (_, _, &[(4, quad), (1, kicker)]) => (
            Category::FourOfAKind,
            vec![quad, kicker],
            format!("Four of {}", quad.plural()),
        ),
        (_, _, &[(3, trips), (2, pair)]) => (
            Category::FullHouse,
            vec![trips, pair],
            format!("Full house, {} over {}", trips.plural(), pair.plural()),
        ),
        (true, None, _) => (
            Category::Flush,
            ranks.to_vec(),
            format!("Flush ({}-high)", high.name()),
        ),
        (false, Some(top), _) => (
            Category::Straight,
            vec![top],
            format!("Straight ({}-high)", top.name()),
        ),
        (_, _, &[(3, trips), (1, a), (1, b)]) => (
            Category::ThreeOfAKind,
            vec![trips, a, b],
            format!("Three of a kind ({})", trips.plural()),
        ),
        (_, _, &[(2, hi), (2, lo), (1, kicker)]) => (
            Category::TwoPair,
            vec![hi, lo, kicker],
            format!("Two pair ({} and {})", hi.plural(), lo.plural()),
        ),
        (_, _, &[(2, pair), (1, a), (1, b), (1, c)]) => (
            Category::OnePair,
            vec![pair, a, b, c],
            format!("Pair of {}", pair.plural()),
        ),
        _ => (
            Category::HighCard,
            ranks.to_vec(),
            format!("High card {}", high.name()),
        ),
    };

    HandRanking {
        category,
        tie_break: tie.iter().map(|r| r.value()).collect(),
        label,
        best_five: cards,
    }
}

/// Top card of a five-card straight given ranks sorted high to low, with the
/// wheel (A-2-3-4-5) topping out at 5.
fn detect_straight_high(desc: &[Rank; 5]) -> Option<Rank> {
    if desc.windows(2).all(|w| w[0].value() == w[1].value() + 1) {
        return Some(desc[0]);
    }
    if *desc == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
        return Some(Rank::Five);
    }
    None
}
