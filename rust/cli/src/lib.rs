//! # fairdeal CLI Library
//!
//! Command-line front end for the fairdeal engine: commit to a seed, deal a
//! hand, evaluate cards, and verify revealed seeds or whole record files.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. Output goes to the writers passed
//! in, so the whole CLI can be driven in-process.
//!
//! ```
//! let mut out = Vec::new();
//! let args = ["fairdeal", "commit", "--seed", ""];
//! let code = fairdeal_cli::run(args, &mut out, &mut std::io::sink());
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().starts_with("e3b0c442"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Commit to a seed, deal one hand, reveal the seed
//! - `eval`: Rank the best hand out of 5 to 7 cards
//! - `commit`: Print the commitment for a seed
//! - `verify`: Check a seed against a commitment, or audit a record file
//! - `rng`: Print the shuffled deck order for a seed
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;

use cli::{Commands, FairdealCli};
use commands::{
    DealOptions, VerifyMode, handle_cfg_command, handle_commit_command, handle_deal_command,
    handle_eval_command, handle_rng_command, handle_verify_command,
};
use fairdeal_engine::fairness::generate_seed;
use tracing::debug;

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `1` when a seed, commitment or record fails
/// verification, `2` for any other error
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "eval", "commit", "verify", "rng", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FairdealCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: fairdeal <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: fairdeal --help");
            return exit_code::ERROR;
        }
    };

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::VerificationFailed(msg)) => {
            debug!(%msg, "verification failed");
            exit_code::VERIFY_FAILED
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Commit { seed } => {
            let cfg = load_config()?;
            let seed = resolve_seed(seed, &cfg, err)?;
            handle_commit_command(seed, out)
        }
        Commands::Verify {
            seed,
            commitment,
            input,
        } => {
            let mode = match (seed, commitment, input) {
                (Some(seed), Some(commitment), None) => VerifyMode::Seed { seed, commitment },
                (None, None, Some(input)) => VerifyMode::Records { input },
                _ => {
                    return Err(CliError::InvalidInput(
                        "verify needs --seed with --commitment, or --input".to_string(),
                    ));
                }
            };
            handle_verify_command(mode, out, err)
        }
        Commands::Eval { cards, json } => {
            let unicode = unicode_output()?;
            handle_eval_command(&cards, json, unicode, out)
        }
        Commands::Rng { seed } => {
            let cfg = load_config()?;
            let unicode = !cfg.ascii && formatters::supports_unicode();
            let seed = resolve_seed(seed, &cfg, err)?;
            handle_rng_command(seed, unicode, out)
        }
        Commands::Deal {
            seed,
            seats,
            output,
        } => {
            let cfg = load_config()?;
            let seed = resolve_seed(seed, &cfg, err)?.unwrap_or_else(generate_seed);
            let opts = DealOptions {
                seed,
                seats: seats.unwrap_or(cfg.seats),
                output,
                unicode: !cfg.ascii && formatters::supports_unicode(),
            };
            handle_deal_command(opts, out)
        }
    }
}

/// The `--seed` flag, else the configured seed. `None` leaves generation to
/// the command.
fn resolve_seed(
    flag: Option<String>,
    cfg: &config::Config,
    err: &mut dyn Write,
) -> Result<Option<String>, CliError> {
    if flag.is_some() {
        return Ok(flag);
    }
    if let Some(seed) = &cfg.seed {
        ui::display_warning(
            err,
            "using the configured seed; its commitment is the same every run",
        )?;
        return Ok(Some(seed.clone()));
    }
    Ok(None)
}

fn load_config() -> Result<config::Config, CliError> {
    config::load().map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))
}

fn unicode_output() -> Result<bool, CliError> {
    Ok(!load_config()?.ascii && formatters::supports_unicode())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn run_cli(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    #[serial]
    fn test_help_goes_to_stdout() {
        let (code, out, _) = run_cli(&["fairdeal", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Usage"));
    }

    #[test]
    #[serial]
    fn test_unknown_command_lists_commands() {
        let (code, _, err) = run_cli(&["fairdeal", "shuffle"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("Commands:"));
        assert!(err.contains("  verify"));
    }

    #[test]
    #[serial]
    fn test_verify_mismatch_exit_code() {
        let (code, out, _) = run_cli(&["fairdeal", "verify", "--seed", "a", "--commitment", "00"]);
        assert_eq!(code, exit_code::VERIFY_FAILED);
        assert_eq!(out, "MISMATCH\n");
    }

    #[test]
    #[serial]
    fn test_verify_without_arguments_is_error() {
        let (code, _, err) = run_cli(&["fairdeal", "verify"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(err.starts_with("Error: Invalid input"));
    }

    #[test]
    #[serial]
    fn test_eval_invalid_cards_is_error() {
        let (code, out, err) = run_cli(&["fairdeal", "eval", "--cards", "Ah Kh"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        assert!(err.contains("Invalid input"));
    }
}
