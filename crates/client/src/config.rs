//! Client configuration.

use std::time::Duration;

/// Default HTTP request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the car service client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base HTTP URL of the car service, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request.
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Configuration with the default request timeout. A trailing slash
    /// on `base_url` is trimmed.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                        | Required | Default |
    /// |--------------------------------|----------|---------|
    /// | `ZIPTRIP_BASE_URL`             | **yes**  | --      |
    /// | `ZIPTRIP_REQUEST_TIMEOUT_SECS` | no       | `30`    |
    ///
    /// # Panics
    ///
    /// Panics if `ZIPTRIP_BASE_URL` is not set or the timeout is not a
    /// valid integer.
    pub fn from_env() -> Self {
        let base_url = std::env::var("ZIPTRIP_BASE_URL")
            .expect("ZIPTRIP_BASE_URL must be set in the environment");

        let timeout_secs: u64 = std::env::var("ZIPTRIP_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("ZIPTRIP_REQUEST_TIMEOUT_SECS must be a valid u64");

        let mut config = Self::new(base_url);
        config.request_timeout = Duration::from_secs(timeout_secs);
        config
    }
}
