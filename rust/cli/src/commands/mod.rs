//! Command handler modules for the fairdeal CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - Errors propagated as `CliError`; `run` maps them to exit codes

mod cfg;
mod commit;
mod deal;
mod eval;
mod rng;
mod verify;

pub use cfg::handle_cfg_command;
pub use commit::handle_commit_command;
pub use deal::{DealOptions, handle_deal_command};
pub use eval::handle_eval_command;
pub use rng::handle_rng_command;
pub use verify::{VerifyMode, handle_verify_command};
