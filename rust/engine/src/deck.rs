use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// Domain tag separating the shuffle key from the published commitment,
/// which hashes the bare seed.
const SHUFFLE_DOMAIN: &[u8] = b"fairdeal/shuffle/v1\0";

/// An ordered deck with the top card at index 0.
///
/// Dealing consumes the deck and hands back what is left, so a deck that has
/// already been dealt from cannot be dealt from again:
///
/// ```
/// use fairdeal_engine::deck::Deck;
///
/// let deck = Deck::shuffled("hand-1");
/// let (hole, deck) = deck.draw(2).unwrap();
/// assert_eq!(hole.len(), 2);
/// assert_eq!(deck.remaining(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The unshuffled 52-card deck.
    pub fn standard() -> Self {
        Self { cards: full_deck() }
    }

    /// A full deck permuted deterministically by `seed`.
    pub fn shuffled(seed: &str) -> Self {
        let mut rng = ChaCha20Rng::from_seed(shuffle_key(seed));
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Builds a deck from an explicit order, rejecting repeated cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, EngineError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(EngineError::DuplicateCard(*card));
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Takes `n` cards off the top.
    pub fn draw(self, n: usize) -> Result<(Vec<Card>, Deck), EngineError> {
        self.ensure(n)?;
        let mut drawn = self.cards;
        let rest = drawn.split_off(n);
        Ok((drawn, Deck { cards: rest }))
    }

    /// Takes the top card.
    pub fn draw_one(self) -> Result<(Card, Deck), EngineError> {
        self.ensure(1)?;
        let mut cards = self.cards;
        let top = cards.remove(0);
        Ok((top, Deck { cards }))
    }

    /// Discards the top card face down, returning it for the record.
    pub fn burn(self) -> Result<(Card, Deck), EngineError> {
        self.draw_one()
    }

    fn ensure(&self, requested: usize) -> Result<(), EngineError> {
        if requested > self.cards.len() {
            return Err(EngineError::DeckExhausted {
                requested,
                remaining: self.cards.len(),
            });
        }
        Ok(())
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Shuffles a fresh deck for `seed`. Any string, including `""`, is a valid seed.
pub fn shuffled_deck(seed: &str) -> Deck {
    Deck::shuffled(seed)
}

fn shuffle_key(seed: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SHUFFLE_DOMAIN);
    hasher.update(seed.as_bytes());
    hasher.finalize().into()
}
