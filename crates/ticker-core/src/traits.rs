use async_trait::async_trait;

use crate::error::Error;
use crate::types::PriceLookup;

/// Source of current quotes for ticker symbols.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Look up the current price for `symbol`. The symbol is passed through
    /// unchanged. A symbol the upstream knows nothing about is
    /// `Ok(PriceLookup::NoData)`, not an error.
    async fn current_price(&self, symbol: &str) -> Result<PriceLookup, Error>;
}
