/// Factory: build `CredentialGate` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{CredentialGate, GatePolicy, policy::PolicyError};

pub fn build_credential_gate(config: &Config) -> Result<Arc<CredentialGate>, PolicyError> {
    let policy = GatePolicy::new(
        config.token_algorithms.clone(),
        config.token_leeway_seconds,
    )?;

    Ok(Arc::new(CredentialGate::new(&config.token_secret, policy)))
}
