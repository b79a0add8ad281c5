//! Diagnostic logging
//!
//! `tracing` events go to stderr so the status report on stdout stays clean.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use crate::config::Verbosity;

/// Pick the default level from `-v` count, falling back to configured verbosity
pub fn level_filter(verbose: u8, verbosity: Verbosity) -> LevelFilter {
    match verbose {
        0 => match verbosity {
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        },
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` directives take precedence over the computed default.
/// Calling this twice is harmless.
pub fn init(verbose: u8, verbosity: Verbosity) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(verbose, verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
