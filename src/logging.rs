//! Tracing initialization
//!
//! Core events (filter passes, pool state changes, contradictions) are emitted
//! with `tracing`; this module wires them to stderr for the CLI.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `CODEBREAKER_LOG=codebreaker=debug`
pub const LOG_ENV: &str = "CODEBREAKER_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber
///
/// Reads the filter from [`LOG_ENV`]. Falls back to `codebreaker=debug` when
/// `verbose` is set and `codebreaker=warn` otherwise, so game output is not
/// interleaved with log lines by default.
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "codebreaker=debug"
        } else {
            "codebreaker=warn"
        };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
