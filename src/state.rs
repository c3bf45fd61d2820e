/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: gate: CredentialGate (secret + 検証ポリシー)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::CredentialGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<CredentialGate>,
}

impl AppState {
    pub fn new(gate: Arc<CredentialGate>) -> Self {
        Self { gate }
    }
}
