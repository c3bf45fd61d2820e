/*
 * Responsibility
 * - middleware の公開インターフェース
 * - bearer_auth: 保護ルートの前段に置く認証ゲート
 * - cors / http / security_headers: Router 全体に掛ける横断的な layer
 */
pub mod bearer_auth;
pub mod cors;
pub mod http;
pub mod security_headers;
