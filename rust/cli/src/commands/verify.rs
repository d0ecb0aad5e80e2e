//! Verify command handler.
//!
//! Two modes:
//!
//! - `--seed S --commitment C`: prints `OK` or `MISMATCH` for a single pair.
//! - `--input FILE`: audits every `DealRecord` line of a JSONL (or `.jsonl.zst`)
//!   file by checking the commitment and replaying the deal from the revealed seed.
//!
//! Problems are collected per line with `BatchValidationError` so one run
//! reports everything that is wrong with a file.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text_auto;
use crate::ui;
use fairdeal_engine::fairness::verify;
use fairdeal_engine::record::DealRecord;
use std::io::Write;
use tracing::{debug, warn};

type VerifyError = BatchValidationError<usize>;

#[derive(Debug)]
pub enum VerifyMode {
    Seed { seed: String, commitment: String },
    Records { input: String },
}

/// Returns `CliError::VerificationFailed` when a commitment or any record
/// does not check out, and `CliError::InvalidInput` when the only problems
/// are record lines that cannot be parsed at all.
pub fn handle_verify_command(
    mode: VerifyMode,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match mode {
        VerifyMode::Seed { seed, commitment } => {
            let ok = verify(&seed, commitment.trim());
            writeln!(out, "{}", ui::verdict(ok))?;
            if ok {
                Ok(())
            } else {
                Err(CliError::VerificationFailed(
                    "seed does not match commitment".to_string(),
                ))
            }
        }
        VerifyMode::Records { input } => verify_records(&input, out, err),
    }
}

fn verify_records(input: &str, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let content = read_text_auto(input).map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    let mut failures: Vec<VerifyError> = Vec::new();
    let mut malformed = 0usize;
    let mut records = 0usize;

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        records += 1;
        let record: DealRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                malformed += 1;
                failures.push(VerifyError {
                    item_context: line_no,
                    message: format!("Invalid deal record: {}", e),
                });
                continue;
            }
        };
        let issues = record.audit();
        debug!(line = line_no, hand_id = %record.hand_id, issues = issues.len(), "audited record");
        for issue in issues {
            failures.push(VerifyError {
                item_context: line_no,
                message: format!("{}: {}", record.hand_id, issue),
            });
        }
    }

    if failures.is_empty() {
        writeln!(out, "Verify: {} (records={})", ui::verdict(true), records)?;
        return Ok(());
    }

    writeln!(out, "Verify: {} (records={})", ui::verdict(false), records)?;
    writeln!(err, "Errors found:")?;
    for failure in &failures {
        writeln!(err, "  Line {}", failure)?;
    }
    warn!(records, failures = failures.len(), "record file failed verification");

    // A failed audit outranks unreadable lines.
    let audit_failures = failures.len() - malformed;
    if audit_failures > 0 {
        Err(CliError::VerificationFailed(format!(
            "{} problem(s) in {} records",
            audit_failures, records
        )))
    } else {
        Err(CliError::InvalidInput(format!(
            "{} malformed record line(s)",
            malformed
        )))
    }
}
