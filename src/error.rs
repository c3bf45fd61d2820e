/*
 * Responsibility
 * - 認証ゲートの拒否理由 (RejectionReason) の定義
 * - メッセージ文字列は Display (thiserror) に集約
 * - IntoResponse 実装 (HTTP status / JSON error body)
 */
use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Why the gate refused a request.
///
/// The `Display` output is the client-facing message and is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("Missing auth token.")]
    MissingCredential,
    #[error("Invalid/Malformed auth token. Authorization Header must contain Bearer token.")]
    MalformedScheme,
    #[error("Malformed authorization token. Unexpected signing method: {alg}.")]
    UnexpectedSigningMethod { alg: String },
    #[error("Malformed authorization token. {reason}")]
    Malformed { reason: String },
    #[error("Authorization token is not valid.")]
    TokenNotValid,
}

impl RejectionReason {
    pub fn malformed(reason: impl fmt::Display) -> Self {
        Self::Malformed {
            reason: reason.to_string(),
        }
    }

    /// Stable identifier for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::MalformedScheme => "malformed_scheme",
            Self::UnexpectedSigningMethod { .. } => "unexpected_signing_method",
            Self::Malformed { .. } => "malformed",
            Self::TokenNotValid => "token_not_valid",
        }
    }

    // Every rejection is a 403, including the ones where 401 would be more conventional.
    pub fn status(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }
}

impl IntoResponse for RejectionReason {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
