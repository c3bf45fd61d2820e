//! Bearer credential gate: header extraction → format check → HMAC verification.
//!
//! Pure and synchronous. A `CredentialGate` is built once from the injected secret
//! and policy, then shared (`Arc`) across every request without locking.

use axum::http::HeaderMap;
use jsonwebtoken::{DecodingKey, Validation, errors::ErrorKind};
use serde_json::{Map, Value};

use crate::error::RejectionReason;
use crate::services::auth::{
    bearer::extract_bearer, claims::VerifiedClaims, compact, policy::GatePolicy,
};

/// Outcome of one evaluation. Produced per request, never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Allow(VerifiedClaims),
    Reject(RejectionReason),
}

/// HMAC bearer-token verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct CredentialGate {
    decoding_key: DecodingKey,
    validation: Validation,
    policy: GatePolicy,
}

impl std::fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("CredentialGate")
            .field("policy", &self.policy)
            .finish()
    }
}

impl CredentialGate {
    pub fn new(secret: &[u8], policy: GatePolicy) -> Self {
        let decoding_key = DecodingKey::from_secret(secret);

        let mut validation = Validation::default();
        validation.algorithms = policy.algorithms().to_vec();
        // Credentials are not required to carry any claim; exp/nbf are checked when present.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = policy.leeway_seconds();

        Self {
            decoding_key,
            validation,
            policy,
        }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Decide whether a request carrying `headers` may reach the protected handler.
    pub fn evaluate(&self, headers: &HeaderMap) -> GateDecision {
        match extract_bearer(headers).and_then(|token| self.verify(token)) {
            Ok(claims) => GateDecision::Allow(claims),
            Err(reason) => GateDecision::Reject(reason),
        }
    }

    /// Verify a bare token (no `Bearer ` prefix).
    pub fn verify(&self, token: &str) -> Result<VerifiedClaims, RejectionReason> {
        let declared = compact::declared_algorithm(token).map_err(RejectionReason::malformed)?;

        // The policy decides the family; the header only gets to pick inside it.
        let algorithm = self
            .policy
            .accept(&declared)
            .ok_or(RejectionReason::UnexpectedSigningMethod { alg: declared })?;

        let data = jsonwebtoken::decode::<Map<String, Value>>(
            token,
            &self.decoding_key,
            &self.validation,
        )
        .map_err(reject_verification_error)?;

        Ok(VerifiedClaims::new(algorithm, data.claims))
    }
}

fn reject_verification_error(err: jsonwebtoken::errors::Error) -> RejectionReason {
    match err.kind() {
        ErrorKind::ExpiredSignature | ErrorKind::ImmatureSignature => {
            RejectionReason::TokenNotValid
        }
        ErrorKind::InvalidSignature => RejectionReason::malformed("signature is invalid"),
        ErrorKind::Base64(e) => RejectionReason::malformed(e),
        ErrorKind::Json(e) => RejectionReason::malformed(e),
        _ => RejectionReason::malformed(&err),
    }
}
