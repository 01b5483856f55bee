use std::fmt;
use std::time::Duration;

/// Default Alpha Vantage query endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.alphavantage.co/query";

/// Default bound on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream quote configuration. Built once at startup and shared read-only.
#[derive(Clone)]
pub struct QuoteConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl QuoteConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different query endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an API key was supplied at all.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

// Keeps the key out of logs.
impl fmt::Debug for QuoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
