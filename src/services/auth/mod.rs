pub mod bearer;
pub mod claims;
pub mod compact;
pub mod factory;
pub mod gate;
pub mod policy;

pub use claims::VerifiedClaims;
pub use factory::build_credential_gate;
pub use gate::{CredentialGate, GateDecision};
pub use policy::GatePolicy;
