//! `rng`: print the shuffled deck order for a seed.
//!
//! Useful for checking a revealed seed by hand: the first cards listed are
//! the ones dealt first.

use crate::error::CliError;
use crate::formatters::format_card;
use fairdeal_engine::deck::shuffled_deck;
use fairdeal_engine::fairness::generate_seed;
use std::io::Write;

pub fn handle_rng_command(
    seed: Option<String>,
    unicode: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(generate_seed);
    let deck = shuffled_deck(&seed);
    writeln!(out, "Seed: {}", seed)?;
    for (row, chunk) in deck.cards().chunks(13).enumerate() {
        let cards: Vec<String> = chunk.iter().map(|c| format_card(c, unicode)).collect();
        writeln!(out, "{:>2}: {}", row * 13 + 1, cards.join(" "))?;
    }
    Ok(())
}
