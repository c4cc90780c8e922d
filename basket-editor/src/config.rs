//! Editor configuration

use std::time::Duration;

/// Editor configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_COLLECTION | cestas | Collection submissions are written to |
/// | SUBMIT_TIMEOUT_MS | 30000 | Bound on a single store call |
/// | LOG_LEVEL | info | Default tracing filter |
///
/// A `.env` file in the working directory is loaded first when present.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Collection the session writes to
    pub collection: String,
    /// Store call timeout (milliseconds)
    pub submit_timeout_ms: u64,
    /// Default log level when RUST_LOG is unset
    pub log_level: String,
}

impl EditorConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            collection: std::env::var("CATALOG_COLLECTION")
                .unwrap_or_else(|_| shared::models::CATALOG_COLLECTION.into()),
            submit_timeout_ms: std::env::var("SUBMIT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Set the target collection
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the store call timeout
    pub fn with_submit_timeout_ms(mut self, ms: u64) -> Self {
        self.submit_timeout_ms = ms;
        self
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            collection: shared::models::CATALOG_COLLECTION.into(),
            submit_timeout_ms: 30_000,
            log_level: "info".into(),
        }
    }
}
