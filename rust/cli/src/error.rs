//! CLI error types.
//!
//! Command handlers return `Result<(), CliError>`; [`crate::run`] turns the
//! variant into an exit code. `BatchValidationError<T>` carries one failure
//! of a multi-item check, so `verify --input` can report every bad line.

use fairdeal_engine::EngineError;
use std::fmt;

/// Everything a command handler can fail with.
#[derive(Debug)]
pub enum CliError {
    /// Reading a record file, writing output
    Io(std::io::Error),

    /// Bad cards, bad record lines, missing arguments
    InvalidInput(String),

    /// Config file or `FAIRDEAL_*` variable rejected
    Config(String),

    /// Engine rejected the request (bad cards, exhausted deck, ...)
    Engine(String),

    /// A seed, commitment or deal record did not verify
    VerificationFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::VerificationFailed(msg) => write!(f, "Verification failed: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidCard(_)
            | EngineError::InvalidCardCount { .. }
            | EngineError::DuplicateCard(_)
            | EngineError::InvalidCommitment(_) => CliError::InvalidInput(error.to_string()),
            other => CliError::Engine(other.to_string()),
        }
    }
}

/// One failed item of a batch check, tagged with whatever identifies the
/// item (a line number for record files).
///
///
/// ```rust
/// use fairdeal_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "seed does not match commitment".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: seed does not match commitment");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    pub item_context: T,
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
