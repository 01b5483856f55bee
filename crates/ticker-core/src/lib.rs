pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::QuoteConfig;
pub use error::Error;
pub use traits::QuoteSource;
pub use types::{PriceLookup, QuoteRequest, QuoteResult, ToolError};
