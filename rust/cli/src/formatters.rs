//! Card and board formatters for terminal display.
//!
//! Cards render with Unicode suit symbols (♥ ♦ ♣ ♠) or, when `unicode` is
//! false, in the plain `As Td` notation that `eval` also accepts as input.
//!
//! ## Example
//!
//! ```rust
//! use fairdeal_engine::cards::{Card, Rank, Suit};
//! use fairdeal_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert_eq!(format_card(&ace_spades, true), "A♠");
//! assert_eq!(format_card(&ace_spades, false), "As");
//! assert_eq!(format_board(&[ace_spades], false), "[As]");
//! ```

use fairdeal_engine::cards::{Card, Rank, Suit};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit, unicode: bool) -> String {
    if unicode {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Single-character rank (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    rank.symbol().to_string()
}

pub fn format_card(card: &Card, unicode: bool) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit, unicode))
}

/// Format cards in bracket notation: `[A♠ K♥ Q♦]`, or `[]` when empty.
pub fn format_board(cards: &[Card], unicode: bool) -> String {
    let formatted: Vec<String> = cards.iter().map(|c| format_card(c, unicode)).collect();
    format!("[{}]", formatted.join(" "))
}
