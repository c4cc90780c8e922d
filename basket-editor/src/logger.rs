//! Logging Infrastructure
//!
//! Console subscriber for hosts embedding the editor.

use tracing_subscriber::EnvFilter;

/// Initialize the logger at the given default level.
///
/// `RUST_LOG` takes precedence when set. Calling this again after a
/// subscriber is installed is a no-op.
pub fn init_logger(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}

/// Initialize the logger from an editor configuration
pub fn init_from_config(config: &crate::EditorConfig) {
    init_logger(&config.log_level);
}
