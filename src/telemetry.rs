//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Initialize tracing for the process. `RUST_LOG` overrides the environment's
/// default level. Logs go to stderr so replay output on stdout stays clean.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env.default_log_level()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if env.json_logs() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
