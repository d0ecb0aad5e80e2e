//! `eval`: rank the best five-card hand from 5 to 7 cards.

use crate::error::CliError;
use crate::formatters::format_board;
use fairdeal_engine::cards::parse_cards;
use fairdeal_engine::hand::evaluate_best_hand;
use std::io::Write;
use tracing::debug;

/// Parses `cards`, evaluates them and prints the ranking as text or JSON.
///
/// Malformed cards, duplicates and counts outside 5..=7 surface as
/// `CliError::InvalidInput`.
pub fn handle_eval_command(
    cards: &str,
    json: bool,
    unicode: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    let ranking = evaluate_best_hand(&cards)?;
    let score = ranking.score();
    debug!(count = cards.len(), packed = score.packed(), "evaluated hand");

    if json {
        let value = serde_json::json!({
            "label": ranking.label,
            "category": ranking.category,
            "tie_break": ranking.tie_break,
            "score": score.packed(),
            "best_five": ranking.best_five,
        });
        let s = serde_json::to_string(&value).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(out, "Hand: {}", ranking.label)?;
    writeln!(
        out,
        "Category: {} ({})",
        ranking.category.name(),
        ranking.category.value()
    )?;
    writeln!(out, "Tie-break: {:?}", ranking.tie_break)?;
    writeln!(out, "Score: {:#08x}", score.packed())?;
    writeln!(out, "Best five: {}", format_board(&ranking.best_five, unicode))?;
    Ok(())
}
