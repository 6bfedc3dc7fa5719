// src/logging.rs

//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! `tfexec` is a library, so it never installs a subscriber on its
//! own; it only emits `tracing` events at the executor seams. Binaries
//! embedding the library can call [`init_logging`] to get a sensible
//! default subscriber.
//!
//! Priority for determining the log filter:
//! 1. `TFEXEC_LOG` environment variable (e.g. "info", "tfexec=debug")
//! 2. default to `info`
//!
//! Logs are sent to STDERR so that stdout stays free for captured
//! terraform output.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialise a global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env("TFEXEC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Send logs to stderr; keep stdout free for command output.
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
