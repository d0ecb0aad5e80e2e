use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Hand evaluation needs 5 to 7 cards, got {count}")]
    InvalidCardCount { count: usize },
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Seat {seat} already holds hole cards")]
    HoleCardsAlreadyDealt { seat: usize },
    #[error("Invalid commitment: {0:?}")]
    InvalidCommitment(String),
}
