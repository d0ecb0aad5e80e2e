//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// A seed, commitment or deal record did not verify.
pub const VERIFY_FAILED: i32 = 1;

/// Bad input, I/O failure or an engine error.
pub const ERROR: i32 = 2;
