//! # fairdeal-engine: seeded hold'em dealing and hand evaluation
//!
//! A small, pure library for running a provably fair Texas Hold'em deal:
//! a seed string drives a reproducible shuffle, a SHA-256 commitment to that
//! seed is published before the hand, and anyone holding the revealed seed
//! can replay the deal and check it. Hands of 5 to 7 cards are ranked by
//! exhaustive best-five search with full tie-breaking.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and `"As"` notation
//! - [`deck`] - Deterministic deck shuffling with a ChaCha20 RNG keyed by the seed
//! - [`seat`] - Seat state for dealing hole cards
//! - [`deal`] - Preflop, flop, turn and river dealing
//! - [`hand`] - Best-hand evaluation, scores and labels
//! - [`fairness`] - Seed commitment and verification
//! - [`record`] - Deal transcripts, audit and JSONL logging
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use fairdeal_engine::cards::{Card, Rank, Suit};
//! use fairdeal_engine::hand::evaluate_best_hand;
//!
//! // Evaluate a 7-card poker hand
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let ranking = evaluate_best_hand(&cards).unwrap();
//! println!("{} ({:?})", ranking.label, ranking.category);
//! ```
//!
//! ## Commit, Deal, Reveal
//!
//! ```rust
//! use fairdeal_engine::deal::deal_hand;
//! use fairdeal_engine::fairness::{commit, generate_seed, verify};
//! use fairdeal_engine::seat::seats;
//!
//! let seed = generate_seed();
//! let published = commit(&seed);
//!
//! let hand = deal_hand(&seed, seats(6)).unwrap();
//! assert_eq!(hand.board.len(), 5);
//!
//! // After the hand the seed is revealed and anyone can check it.
//! assert!(verify(&seed, published.as_str()));
//! assert_eq!(deal_hand(&seed, seats(6)).unwrap(), hand);
//! ```

pub mod cards;
pub mod deal;
pub mod deck;
pub mod errors;
pub mod fairness;
pub mod hand;
pub mod record;
pub mod seat;

pub use errors::EngineError;
