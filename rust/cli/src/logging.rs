//! Tracing setup for the `fairdeal` binary.
//!
//! Diagnostics go to stderr so stdout stays clean for commitments, seeds and
//! JSON. The filter comes from `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
