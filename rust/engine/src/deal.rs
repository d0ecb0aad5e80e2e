//! Hold'em dealing order over a seeded deck.
//!
//! Every step takes the deck (and seats) by value and returns the new state,
//! so the remaining deck has to be threaded from street to street:
//!
//! ```
//! use fairdeal_engine::deal::{deal_flop, deal_preflop, deal_river, deal_turn};
//! use fairdeal_engine::deck::shuffled_deck;
//! use fairdeal_engine::seat::seats;
//!
//! let deck = shuffled_deck("example");
//! let (seats, deck) = deal_preflop(seats(3), deck).unwrap();
//! let (flop, deck) = deal_flop(deck).unwrap();
//! let (turn, deck) = deal_turn(deck).unwrap();
//! let (river, deck) = deal_river(deck).unwrap();
//! assert!(seats.iter().all(|s| s.hole_pair().is_some()));
//! assert_eq!(deck.remaining(), 52 - 6 - 3 - 1 - 1 - 3);
//! # let _ = (flop, turn, river);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::{shuffled_deck, Deck};
use crate::errors::EngineError;
use crate::seat::Seat;

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

/// Deals two hole cards to every active seat, one card per seat per pass.
///
/// Fails before dealing anything if the deck cannot cover both passes.
pub fn deal_preflop(mut seats: Vec<Seat>, deck: Deck) -> Result<(Vec<Seat>, Deck), EngineError> {
    if let Some(seat) = seats.iter().find(|s| s.is_active() && s.has_cards()) {
        return Err(EngineError::HoleCardsAlreadyDealt { seat: seat.id });
    }
    let active = seats.iter().filter(|s| s.is_active()).count();
    let (cards, deck) = deck.draw(active * 2)?;
    let mut cards = cards.into_iter();
    for _ in 0..2 {
        for seat in seats.iter_mut().filter(|s| s.is_active()) {
            // draw() returned exactly two cards per active seat
            if let Some(c) = cards.next() {
                seat.give_card(c)?;
            }
        }
    }
    Ok((seats, deck))
}

/// Burn one, then deal the three flop cards.
pub fn deal_flop(deck: Deck) -> Result<([Card; 3], Deck), EngineError> {
    let (_, flop, deck) = burn_and_deal::<3>(deck)?;
    Ok((flop, deck))
}

/// Burn one, then deal the turn.
pub fn deal_turn(deck: Deck) -> Result<(Card, Deck), EngineError> {
    let (_, [turn], deck) = burn_and_deal::<1>(deck)?;
    Ok((turn, deck))
}

/// Burn one, then deal the river.
pub fn deal_river(deck: Deck) -> Result<(Card, Deck), EngineError> {
    let (_, [river], deck) = burn_and_deal::<1>(deck)?;
    Ok((river, deck))
}

fn burn_and_deal<const N: usize>(deck: Deck) -> Result<(Card, [Card; N], Deck), EngineError> {
    // Check up front so a short deck never loses its burn card.
    if deck.remaining() < N + 1 {
        return Err(EngineError::DeckExhausted {
            requested: N + 1,
            remaining: deck.remaining(),
        });
    }
    let (burn, deck) = deck.burn()?;
    let (cards, deck) = deck.draw(N)?;
    let cards: [Card; N] = cards
        .try_into()
        .map_err(|_: Vec<Card>| EngineError::DeckExhausted {
            requested: N,
            remaining: 0,
        })?;
    Ok((burn, cards, deck))
}

/// A fully dealt hand: seats with hole cards, the board, and what is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtHand {
    pub seats: Vec<Seat>,
    /// Flop, turn and river in dealing order.
    pub board: [Card; 5],
    /// Burn cards before flop, turn and river.
    pub burns: [Card; 3],
    pub deck: Deck,
}

impl DealtHand {
    /// Community cards visible on `street`.
    pub fn board_at(&self, street: Street) -> &[Card] {
        match street {
            Street::Preflop => &[],
            Street::Flop => &self.board[..3],
            Street::Turn => &self.board[..4],
            Street::River => &self.board,
        }
    }

    /// Hole cards followed by the full board, for evaluation.
    pub fn cards_for(&self, seat_id: usize) -> Option<Vec<Card>> {
        let seat = self.seats.iter().find(|s| s.id == seat_id)?;
        let hole = seat.hole_pair()?;
        let mut cards = hole.to_vec();
        cards.extend_from_slice(&self.board);
        Some(cards)
    }
}

/// Shuffles for `seed` and runs every street of a hand.
pub fn deal_hand(seed: &str, seats: Vec<Seat>) -> Result<DealtHand, EngineError> {
    let deck = shuffled_deck(seed);
    let (seats, deck) = deal_preflop(seats, deck)?;
    let (burn_flop, flop, deck) = burn_and_deal::<3>(deck)?;
    let (burn_turn, [turn], deck) = burn_and_deal::<1>(deck)?;
    let (burn_river, [river], deck) = burn_and_deal::<1>(deck)?;
    Ok(DealtHand {
        seats,
        board: [flop[0], flop[1], flop[2], turn, river],
        burns: [burn_flop, burn_turn, burn_river],
        deck,
    })
}
