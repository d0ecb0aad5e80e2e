//! Command-line definitions for `fairdeal`.

use clap::{Parser, Subcommand};

use crate::config::MAX_SEATS;

#[derive(Parser, Debug)]
#[command(
    name = "fairdeal",
    version,
    about = "Provably fair Texas Hold'em dealing and hand evaluation"
)]
pub struct FairdealCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Commit to a seed, deal a hand, then reveal the seed
    Deal {
        /// Seed string (generated when omitted)
        #[arg(long)]
        seed: Option<String>,
        /// Number of seats to deal to
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_SEATS as i64))]
        seats: Option<u8>,
        /// Append the deal record to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Rank the best five-card hand out of 5 to 7 cards
    Eval {
        /// Cards such as "Ah Kh Qh Jh Th 2c 3d"
        #[arg(long, required = true)]
        cards: String,
        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the commitment for a seed (generating one when omitted)
    Commit {
        #[arg(long)]
        seed: Option<String>,
    },
    /// Check a seed against a commitment, or audit a file of deal records
    Verify {
        #[arg(long, requires = "commitment", conflicts_with = "input")]
        seed: Option<String>,
        #[arg(long, requires = "seed")]
        commitment: Option<String>,
        /// JSONL (or .jsonl.zst) file of deal records
        #[arg(long)]
        input: Option<String>,
    },
    /// Print the shuffled deck order for a seed
    Rng {
        #[arg(long)]
        seed: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_range_is_enforced() {
        assert!(FairdealCli::try_parse_from(["fairdeal", "deal", "--seats", "0"]).is_err());
        assert!(FairdealCli::try_parse_from(["fairdeal", "deal", "--seats", "11"]).is_err());
        assert!(FairdealCli::try_parse_from(["fairdeal", "deal", "--seats", "10"]).is_ok());
    }

    #[test]
    fn eval_requires_cards() {
        assert!(FairdealCli::try_parse_from(["fairdeal", "eval"]).is_err());
    }

    #[test]
    fn verify_seed_needs_commitment() {
        assert!(FairdealCli::try_parse_from(["fairdeal", "verify", "--seed", "x"]).is_err());
        assert!(
            FairdealCli::try_parse_from([
                "fairdeal",
                "verify",
                "--seed",
                "x",
                "--commitment",
                "y"
            ])
            .is_ok()
        );
    }
}
