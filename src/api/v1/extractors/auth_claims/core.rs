use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::RejectionReason;
use crate::services::auth::VerifiedClaims;

/// Handler で VerifiedClaims を受け取るための extractor
/// bearer_auth middleware が request.extensions() に insert 済みである前提
/// 見つからない場合 (ゲート未設定のルート) は Missing auth token. の 403 を返す
pub struct AuthClaims(pub VerifiedClaims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = RejectionReason;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VerifiedClaims>()
            .cloned()
            .map(AuthClaims)
            .ok_or(RejectionReason::MissingCredential)
    }
}
