/*
 * Responsibility
 * - GET /health (疎通用)
 * - ゲートの外に置く (認証なしで 200)
 */
use axum::{Json, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
