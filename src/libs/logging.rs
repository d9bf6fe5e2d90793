use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs the global subscriber: human-readable lines on stderr, filtered
/// by `RUST_LOG`.
///
/// Store failures are only ever reported here; the CLI itself shows a
/// generic message. Calling this twice is harmless.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = fmt().with_env_filter(env_filter).with_writer(std::io::stderr).with_target(false).try_init();
}
