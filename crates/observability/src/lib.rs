//! Tracing/logging setup shared by the API binary and tests.

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize process-wide tracing.
///
/// JSON output by default (structured logs for production); set
/// `LOG_FORMAT=pretty` for human-readable development output. Filtering is
/// driven by `RUST_LOG`, defaulting to `info`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let pretty = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("pretty"));

    // Already-initialized is fine (tests call this once per process).
    let _ = if pretty {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init()
    };
}
