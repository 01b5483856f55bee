use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use ticker_core::{Error, QuoteRequest, QuoteResult, ToolError};
use ticker_mcp::jsonrpc::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND,
    PARSE_ERROR,
};
use ticker_mcp::tools::CURRENT_PRICE;
use ticker_mcp::{JsonRpcRequest, JsonRpcResponse, ToolCallParams, ToolCallResult, ToolRegistry};

use crate::app_state::AppState;

const PROTOCOL_VERSION: &str = "2024-11-05";

/// Handle an MCP JSON-RPC message posted over HTTP.
///
/// Requests are answered in the response body; notifications get `202 Accepted`.
pub async fn mcp_request(State(state): State<AppState>, body: String) -> Response {
    match handle_message(&state, &body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Decode one raw JSON-RPC message and dispatch it. Shared by every transport.
pub async fn handle_message(state: &AppState, raw: &str) -> Option<JsonRpcResponse> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Unparseable MCP message: {e}");
            return Some(JsonRpcResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {e}"),
            ));
        }
    };

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    match serde_json::from_value::<JsonRpcRequest>(value) {
        Ok(req) => dispatch(state, req).await,
        Err(e) => Some(JsonRpcResponse::error(
            id,
            INVALID_REQUEST,
            format!("Invalid request: {e}"),
        )),
    }
}

/// Route a decoded request to its method handler. Returns `None` for notifications.
pub async fn dispatch(state: &AppState, req: JsonRpcRequest) -> Option<JsonRpcResponse> {
    if req.is_notification() {
        tracing::debug!("Received MCP notification: {}", req.method);
        return None;
    }

    let id = req.response_id();
    if req.jsonrpc != JSONRPC_VERSION {
        return Some(JsonRpcResponse::error(
            id,
            INVALID_REQUEST,
            format!("Unsupported jsonrpc version: {}", req.jsonrpc),
        ));
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(id),
        "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
        "tools/list" => handle_tools_list(id),
        "tools/call" => handle_tools_call(state, id, req.params).await,
        other => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}")),
    };

    Some(response)
}

fn handle_initialize(id: Value) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": "ticker",
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(id: Value) -> JsonRpcResponse {
    let tools = ToolRegistry::definitions();
    JsonRpcResponse::success(id, serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(state: &AppState, id: Value, params: Option<Value>) -> JsonRpcResponse {
    let Some(params) = params else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params");
    };

    let params: ToolCallParams = match serde_json::from_value(params) {
        Ok(params) => params,
        Err(e) => return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {e}")),
    };

    let result = match params.name.as_str() {
        CURRENT_PRICE => {
            let request: QuoteRequest = match serde_json::from_value(params.arguments) {
                Ok(request) => request,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        format!("Missing or invalid 'symbol' parameter: {e}"),
                    )
                }
            };

            match tool_current_price(state, &request).await {
                Ok(quote) => ToolCallResult::quote(&quote),
                Err(err) => {
                    tracing::warn!(symbol = %request.symbol, code = err.code(), "currentPrice failed: {err}");
                    ToolCallResult::failure(&ToolError::from(&err))
                }
            }
        }
        other => {
            return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Unknown tool: {other}"))
        }
    };

    match serde_json::to_value(&result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
    }
}

async fn tool_current_price(state: &AppState, request: &QuoteRequest) -> Result<QuoteResult, Error> {
    let symbol = request.validate()?;
    tracing::info!(symbol, "currentPrice called");

    let lookup = state.quotes.current_price(symbol).await?;
    Ok(QuoteResult::new(symbol, lookup))
}
