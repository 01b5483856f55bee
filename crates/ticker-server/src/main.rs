use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use ticker_alphavantage::AlphaVantageClient;
use ticker_core::config::DEFAULT_ENDPOINT;
use ticker_core::QuoteConfig;
use ticker_server::app_state::AppState;
use ticker_server::{router, stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// JSON-RPC over `POST /mcp`
    Http,
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
}

#[derive(Parser)]
#[command(name = "ticker", about = "MCP server exposing a current stock price tool")]
struct Cli {
    /// Alpha Vantage API key
    #[arg(long, env = "ALPHA_VANTAGE_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Alpha Vantage query endpoint
    #[arg(long, env = "ALPHA_VANTAGE_URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Upper bound on a single upstream request, in seconds
    #[arg(long, env = "TICKER_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[arg(long, env = "TICKER_TRANSPORT", value_enum, default_value_t = Transport::Http)]
    transport: Transport,

    #[arg(long, env = "TICKER_HOST", default_value = "0.0.0.0")]
    host: String,

    #[arg(long, env = "TICKER_PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stderr keeps stdout free for the stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = QuoteConfig::new(cli.api_key)
        .with_endpoint(cli.endpoint)
        .with_timeout(Duration::from_secs(cli.timeout_secs));

    if !config.has_api_key() {
        tracing::warn!("ALPHA_VANTAGE_KEY is not set; upstream calls will likely be rejected");
    }
    tracing::debug!(?config, "quote configuration loaded");

    let client = AlphaVantageClient::new(config)?;
    let state = AppState::new(Arc::new(client));

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Ticker server running on stdio");
            stdio::run(state).await.context("stdio transport failed")?;
        }
        Transport::Http => {
            let app = router::create_router(state);

            let addr = format!("{}:{}", cli.host, cli.port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            tracing::info!("Ticker server listening on {addr}");
            axum::serve(listener, app).await.context("server error")?;
        }
    }

    Ok(())
}
