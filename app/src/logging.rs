//! `tracing` subscriber bootstrap.

use tracing_subscriber::EnvFilter;

/// Fallback filter when the configured one does not parse.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber, writing to stderr.
///
/// Stdout is reserved for CLI output. Calling this more than once is a no-op.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {filter:?} ({e}); using {DEFAULT_FILTER:?}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter, "logging initialized");
    }
}
