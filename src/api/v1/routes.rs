/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は公開、/protected は bearer_auth の後ろに置く
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, protected::protected};
use crate::middleware::bearer_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new().route("/protected", get(protected));
    let protected_routes = bearer_auth::apply(protected_routes, state);

    Router::new()
        .route("/health", get(health))
        .merge(protected_routes)
}
