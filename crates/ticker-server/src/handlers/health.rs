use axum::Json;
use serde_json::Value;

/// Liveness probe. Does not touch the upstream quote service.
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "ticker",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
