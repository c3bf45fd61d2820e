use jsonwebtoken::Algorithm;
use thiserror::Error;

/// The symmetric (shared-secret) family. Nothing outside this list is ever accepted.
pub const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

pub const DEFAULT_LEEWAY_SECONDS: u64 = 60;

pub fn is_hmac(alg: Algorithm) -> bool {
    HMAC_ALGORITHMS.contains(&alg)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("at least one signing algorithm must be accepted")]
    Empty,
    #[error("signing algorithm {0:?} is not a shared-secret algorithm")]
    NotHmac(Algorithm),
}

/// Verifier-side policy: which algorithms are acceptable and how much clock skew
/// is tolerated on `exp` / `nbf`.
///
/// Fixed at construction. The token's own header never widens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePolicy {
    algorithms: Vec<Algorithm>,
    leeway_seconds: u64,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            algorithms: HMAC_ALGORITHMS.to_vec(),
            leeway_seconds: DEFAULT_LEEWAY_SECONDS,
        }
    }
}

impl GatePolicy {
    pub fn new(algorithms: Vec<Algorithm>, leeway_seconds: u64) -> Result<Self, PolicyError> {
        if algorithms.is_empty() {
            return Err(PolicyError::Empty);
        }
        if let Some(alg) = algorithms.iter().copied().find(|alg| !is_hmac(*alg)) {
            return Err(PolicyError::NotHmac(alg));
        }

        Ok(Self {
            algorithms,
            leeway_seconds,
        })
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn leeway_seconds(&self) -> u64 {
        self.leeway_seconds
    }

    /// Map a declared `alg` header value onto an accepted algorithm.
    ///
    /// Unknown names (`none`, typos, future algorithms) are simply not accepted.
    pub fn accept(&self, declared: &str) -> Option<Algorithm> {
        let alg = declared.parse::<Algorithm>().ok()?;
        self.algorithms.contains(&alg).then_some(alg)
    }
}
