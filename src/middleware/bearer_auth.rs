//! Bearer 認証ゲート (ヘッダ抽出 → 検証 → 拒否) を Router に掛ける
//!
//! - 検証そのものは `CredentialGate::evaluate` に閉じている (同期・副作用なし)
//! - Allow: `VerifiedClaims` を request extensions に載せて次へ渡す
//! - Reject: 次段は呼ばずに 403 + `{"message": ...}` を返す

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::RejectionReason;
use crate::services::auth::GateDecision;
use crate::state::AppState;

/// Put every route of `router` behind the credential gate.
///
/// ```ignore
/// let protected = Router::new().route("/protected", get(protected));
/// let protected = middleware::bearer_auth::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // route_layer: 未マッチのパスは 404 のまま (ゲートを通さない)
    router.route_layer(middleware::from_fn_with_state(state, bearer_auth_middleware))
}

async fn bearer_auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, RejectionReason> {
    match state.gate.evaluate(req.headers()) {
        GateDecision::Allow(claims) => {
            tracing::debug!(
                alg = ?claims.algorithm(),
                sub = claims.subject().unwrap_or("-"),
                "bearer credential accepted"
            );

            // middleware → extractor への受け渡し
            req.extensions_mut().insert(claims);

            Ok(next.run(req).await)
        }
        GateDecision::Reject(reason) => {
            tracing::warn!(
                reason = reason.kind(),
                method = %req.method(),
                path = req.uri().path(),
                "bearer credential rejected"
            );
            Err(reason)
        }
    }
}
