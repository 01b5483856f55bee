//! Newline-delimited JSON-RPC over stdin/stdout.
//!
//! stdout carries protocol traffic only; logs go to stderr.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

use crate::app_state::AppState;
use crate::handlers::handle_message;

/// Serve MCP on the process's standard streams until stdin closes.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub async fn run(state: AppState) -> std::io::Result<()> {
    serve(state, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Read one message per line from `input`, write one response per line to `output`.
///
/// # Errors
///
/// Returns an error on any I/O failure of either stream.
pub async fn serve<R, W>(state: AppState, input: R, output: W) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let mut output = BufWriter::new(output);

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let Some(response) = handle_message(&state, &line).await else {
            continue;
        };

        let mut encoded = serde_json::to_vec(&response).map_err(std::io::Error::other)?;
        encoded.push(b'\n');
        output.write_all(&encoded).await?;
        output.flush().await?;
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::Value;
    use ticker_core::{Error, PriceLookup, QuoteSource};

    use super::*;

    struct FixedPrice;

    #[async_trait]
    impl QuoteSource for FixedPrice {
        async fn current_price(&self, symbol: &str) -> Result<PriceLookup, Error> {
            if symbol == "IBM" {
                Ok(PriceLookup::Found("142.37".to_string()))
            } else {
                Ok(PriceLookup::NoData)
            }
        }
    }

    async fn run_lines(input: &str) -> Vec<Value> {
        let state = AppState::new(Arc::new(FixedPrice));
        let mut output = Vec::new();
        serve(state, input.as_bytes(), &mut output).await.unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn answers_requests_in_order() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"currentPrice","arguments":{"symbol":"IBM"}}}"#,
            "\n",
        );

        let responses = run_lines(input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "ticker");
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(
            responses[1]["result"]["structuredContent"],
            serde_json::json!({"symbol": "IBM", "price": "142.37"})
        );
    }

    #[tokio::test]
    async fn garbage_line_gets_parse_error() {
        let responses = run_lines("this is not json\n").await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert!(responses[0]["id"].is_null());
    }

    #[tokio::test]
    async fn empty_input_writes_nothing() {
        assert!(run_lines("").await.is_empty());
    }
}
