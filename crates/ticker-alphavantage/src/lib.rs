pub mod client;
pub mod response;

pub use client::AlphaVantageClient;
pub use response::parse_global_quote;
