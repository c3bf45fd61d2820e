use jsonwebtoken::Algorithm;
use serde_json::{Map, Value};

/// Payload of a token that passed the gate.
///
/// The middleware puts this into request extensions; handlers read it through
/// `AuthClaims`. Nothing here is interpreted for authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedClaims {
    algorithm: Algorithm,
    claims: Map<String, Value>,
}

impl VerifiedClaims {
    pub fn new(algorithm: Algorithm, claims: Map<String, Value>) -> Self {
        Self { algorithm, claims }
    }

    /// Algorithm the signature was verified with.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }
}
