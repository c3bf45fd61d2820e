/*!
 * Verified-claims extractor
 *
 * Responsibility:
 * - ゲートを通過したリクエストの claims (VerifiedClaims) を handler に提供する
 * - 型そのものは services::auth::claims に置き、ここは axum 依存の薄い層だけ
 */

mod core;

pub use self::core::AuthClaims;
