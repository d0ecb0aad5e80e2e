//! `commit`: print the SHA-256 commitment of a seed.

use crate::error::CliError;
use fairdeal_engine::fairness::{commit, generate_seed};
use std::io::Write;
use tracing::debug;

/// Prints the commitment. When no seed is given a fresh one is generated and
/// printed on a second line so it can be revealed later.
pub fn handle_commit_command(seed: Option<String>, out: &mut dyn Write) -> Result<(), CliError> {
    match seed {
        Some(seed) => writeln!(out, "{}", commit(&seed))?,
        None => {
            let seed = generate_seed();
            debug!("generated fresh seed");
            writeln!(out, "{}", commit(&seed))?;
            writeln!(out, "seed: {}", seed)?;
        }
    }
    Ok(())
}
