use std::sync::Arc;

use ticker_core::QuoteSource;

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteSource>,
}

impl AppState {
    #[must_use]
    pub fn new(quotes: Arc<dyn QuoteSource>) -> Self {
        Self { quotes }
    }
}
