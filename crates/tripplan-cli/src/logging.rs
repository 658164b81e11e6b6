use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber; stdout is reserved for command output.
///
/// An explicit `--log-level` wins; otherwise RUST_LOG applies when it parses.
pub fn init_logging(level: Option<LogLevel>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_filter(level: Option<LogLevel>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}
