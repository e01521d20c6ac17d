use std::env;
use std::time::Duration;

/// Remote product store connection settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Environment variables:
    /// - STORE_BASE_URL: API base URL (default: "http://localhost:8000")
    /// - STORE_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url =
            env::var("STORE_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        let timeout_secs = env::var("STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
