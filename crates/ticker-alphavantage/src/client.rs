use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use ticker_core::{Error, PriceLookup, QuoteConfig, QuoteSource};

use crate::response::parse_global_quote;

/// `function` parameter selecting the current-quote endpoint.
pub const GLOBAL_QUOTE_FUNCTION: &str = "GLOBAL_QUOTE";

/// Alpha Vantage-backed implementation of [`QuoteSource`].
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    http: Client,
    config: Arc<QuoteConfig>,
}

impl AlphaVantageClient {
    /// Create a client whose requests are bounded by `config.timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: QuoteConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    #[must_use]
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    async fn fetch(&self, symbol: &str) -> Result<Value, Error> {
        tracing::debug!(endpoint = %self.config.endpoint, symbol, "requesting global quote");

        let resp = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("function", GLOBAL_QUOTE_FUNCTION),
                ("symbol", symbol),
                ("apikey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }

        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_str(&body).map_err(|e| Error::MalformedResponse(e.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            return Error::UpstreamUnavailable(format!(
                "no response within {}ms",
                self.config.timeout.as_millis()
            ));
        }
        // reqwest errors can embed the full URL, which carries the API key.
        Error::UpstreamUnavailable(err.without_url().to_string())
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageClient {
    async fn current_price(&self, symbol: &str) -> Result<PriceLookup, Error> {
        let result = self.fetch(symbol).await.and_then(|body| parse_global_quote(&body));

        match &result {
            Ok(PriceLookup::Found(price)) => tracing::debug!(symbol, price = %price, "quote found"),
            Ok(PriceLookup::NoData) => tracing::info!(symbol, "no quote data for symbol"),
            Err(e) => tracing::warn!(symbol, error = %e, "quote lookup failed"),
        }

        result
    }
}
