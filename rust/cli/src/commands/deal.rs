//! Deal command: commit, deal one hand, reveal.
//!
//! The commitment line is printed before any card so a transcript of the
//! output shows the dealer was bound to the seed up front. The seed itself
//! is the last line.

use crate::error::CliError;
use crate::formatters::format_board;
use fairdeal_engine::deal::deal_hand;
use fairdeal_engine::fairness::commit;
use fairdeal_engine::hand::evaluate_best_hand;
use fairdeal_engine::record::{DealRecord, HandLogger};
use fairdeal_engine::seat::Seat;
use std::io::Write;
use tracing::info;

pub struct DealOptions {
    pub seed: String,
    pub seats: u8,
    pub output: Option<String>,
    pub unicode: bool,
}

pub fn handle_deal_command(opts: DealOptions, out: &mut dyn Write) -> Result<(), CliError> {
    let DealOptions {
        seed,
        seats,
        output,
        unicode,
    } = opts;

    let commitment = commit(&seed);
    writeln!(out, "Commitment: {}", commitment)?;

    let table: Vec<Seat> = (1..=usize::from(seats)).map(Seat::new).collect();
    let hand = deal_hand(&seed, table)?;
    info!(seats, %commitment, remaining = hand.deck.remaining(), "dealt hand");

    for seat in &hand.seats {
        let Some(hole) = seat.hole_pair() else {
            continue;
        };
        let label = match hand.cards_for(seat.id) {
            Some(cards) => evaluate_best_hand(&cards)?.label,
            None => String::new(),
        };
        writeln!(
            out,
            "Seat {}: {} {}",
            seat.id,
            format_board(&hole, unicode),
            label
        )?;
    }
    writeln!(out, "Board: {}", format_board(&hand.board, unicode))?;
    writeln!(out, "Seed: {}", seed)?;

    if let Some(path) = output {
        let mut logger = HandLogger::create(&path)?;
        let record = DealRecord::new(logger.next_id(), &seed, &hand);
        logger.write(&record)?;
        info!(path = %path, hand_id = %record.hand_id, "appended deal record");
    }
    Ok(())
}
