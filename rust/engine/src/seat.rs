use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

/// A seat at the table as far as dealing is concerned.
///
/// Only seats that are in the hand and have not folded receive hole cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Seat identifier (table position, 0-based)
    pub id: usize,
    /// Whether the seat takes part in the current hand
    pub in_hand: bool,
    /// Whether the seat has folded
    pub folded: bool,
    /// Hole cards (up to 2 cards)
    hole: [Option<Card>; 2],
}

impl Seat {
    /// An occupied seat taking part in the hand.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            in_hand: true,
            folded: false,
            hole: [None, None],
        }
    }

    /// A seat that is empty or sitting this hand out.
    pub fn sitting_out(id: usize) -> Self {
        Self {
            in_hand: false,
            ..Self::new(id)
        }
    }

    pub fn fold(mut self) -> Self {
        self.folded = true;
        self
    }

    /// Whether the dealer should give this seat cards.
    pub fn is_active(&self) -> bool {
        self.in_hand && !self.folded
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    /// Both hole cards once the preflop deal is complete.
    pub fn hole_pair(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub fn has_cards(&self) -> bool {
        self.hole.iter().any(Option::is_some)
    }

    pub(crate) fn give_card(&mut self, c: Card) -> Result<(), EngineError> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err(EngineError::HoleCardsAlreadyDealt { seat: self.id })
        }
    }
}

/// `n` active seats with ids `0..n`.
pub fn seats(n: usize) -> Vec<Seat> {
    (0..n).map(Seat::new).collect()
}
