/*
 * Responsibility
 * - GET /protected (ゲートの後段)
 * - ここに届いた時点で credential は検証済み
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::api::v1::extractors::AuthClaims;

pub async fn protected(AuthClaims(claims): AuthClaims) -> impl IntoResponse {
    tracing::debug!(
        sub = claims.subject().unwrap_or("-"),
        "protected resource served"
    );

    (
        StatusCode::OK,
        Json(json!({"message": "got through protection"})),
    )
}
