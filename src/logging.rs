//! Log subscriber setup for the binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to `main`.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `--verbose` count, `None` for zero.
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build the filter: `RUST_LOG` wins, then `--verbose`, then the configured level.
pub fn build_filter(verbose: u8, configured: &str) -> Result<EnvFilter, String> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = verbosity_directive(verbose).unwrap_or(configured);
    EnvFilter::try_new(directive).map_err(|e| format!("invalid log level '{}': {}", directive, e))
}

/// Install a stderr `fmt` subscriber. Safe to call more than once.
pub fn init(verbose: u8, configured: &str) -> Result<(), String> {
    let filter = build_filter(verbose, configured)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .try_init();
    Ok(())
}
