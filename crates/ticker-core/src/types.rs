use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Arguments of a `currentPrice` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub symbol: String,
}

impl QuoteRequest {
    /// Reject symbols that are empty or whitespace only. Anything else is
    /// forwarded upstream exactly as given.
    pub fn validate(&self) -> Result<&str, Error> {
        if self.symbol.trim().is_empty() {
            return Err(Error::InvalidSymbol);
        }
        Ok(&self.symbol)
    }
}

/// Outcome of extracting a price from an upstream quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceLookup {
    Found(String),
    /// The upstream answered but carried no price for the symbol.
    NoData,
}

impl PriceLookup {
    #[must_use]
    pub fn into_price(self) -> Option<String> {
        match self {
            Self::Found(price) => Some(price),
            Self::NoData => None,
        }
    }
}

/// Result of a `currentPrice` call. `price` is omitted when there is no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl QuoteResult {
    #[must_use]
    pub fn new(symbol: impl Into<String>, lookup: PriceLookup) -> Self {
        Self {
            symbol: symbol.into(),
            price: lookup.into_price(),
        }
    }
}

/// Structured error payload returned to tool callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub error: String,
    pub message: String,
}

impl From<&Error> for ToolError {
    fn from(err: &Error) -> Self {
        Self {
            error: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_symbols_are_rejected() {
        for symbol in ["", " ", "\t\n"] {
            let req = QuoteRequest {
                symbol: symbol.to_string(),
            };
            assert!(matches!(req.validate(), Err(Error::InvalidSymbol)));
        }
    }

    #[test]
    fn symbols_are_not_normalized() {
        let req = QuoteRequest {
            symbol: " brk.b ".to_string(),
        };
        assert_eq!(req.validate().unwrap(), " brk.b ");
    }

    #[test]
    fn found_price_is_serialized() {
        let result = QuoteResult::new("IBM", PriceLookup::Found("142.37".to_string()));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"symbol": "IBM", "price": "142.37"}));
    }

    #[test]
    fn missing_price_is_omitted() {
        let result = QuoteResult::new("NOPE", PriceLookup::NoData);
        assert!(result.price.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"symbol": "NOPE"}));
    }

    #[test]
    fn tool_error_carries_code_and_message() {
        let err = Error::UpstreamStatus(500);
        let payload = ToolError::from(&err);
        assert_eq!(payload.error, "upstream_unavailable");
        assert_eq!(payload.message, "upstream returned HTTP 500");
    }
}
