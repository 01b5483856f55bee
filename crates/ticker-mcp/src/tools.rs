use serde::{Deserialize, Serialize};
use serde_json::Value;

use ticker_core::{QuoteResult, ToolError};

/// Name of the single tool this server exposes.
pub const CURRENT_PRICE: &str = "currentPrice";

/// Definition of an MCP tool, as returned by `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Registry of the tools available to callers.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the list of tool definitions for the MCP `tools/list` method.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        vec![ToolDefinition {
            name: CURRENT_PRICE.to_string(),
            description: "Get the current price of a stock by its ticker symbol. The price is omitted when the quote service has no data for the symbol.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "symbol": {
                        "type": "string",
                        "description": "Ticker symbol, e.g. IBM or MSFT"
                    }
                },
                "required": ["symbol"]
            }),
        }]
    }
}

/// Params of a `tools/call` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default = "empty_arguments")]
    pub arguments: Value,
}

fn empty_arguments() -> Value {
    Value::Object(serde_json::Map::new())
}

/// A single content block of a tool result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Result of a `tools/call` request. Tool failures are reported here with
/// `is_error` set, not as JSON-RPC errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "structuredContent")]
    pub structured_content: Value,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolCallResult {
    #[must_use]
    pub fn quote(result: &QuoteResult) -> Self {
        Self::from_value(serde_json::json!(result), false)
    }

    #[must_use]
    pub fn failure(error: &ToolError) -> Self {
        Self::from_value(serde_json::json!(error), true)
    }

    fn from_value(value: Value, is_error: bool) -> Self {
        Self {
            content: vec![ToolContent {
                kind: "text".to_string(),
                text: serde_json::to_string_pretty(&value).unwrap_or_default(),
            }],
            structured_content: value,
            is_error,
        }
    }
}
