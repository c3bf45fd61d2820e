/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → CredentialGate 生成 → Router 組み立て
 * - Middleware の適用 (HTTP 横断 / security headers / CORS)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware;
use crate::services::auth::build_credential_gate;
use crate::state::AppState;

fn init_tracing() {
    // RUST_LOG があればそれを優先する
    // 例: RUST_LOG=info,bearer_gate=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development: すぐ気付けるようにプロセスごと落とす
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    init_panic_hook(!config.app_env.is_production());

    let gate = build_credential_gate(&config).context("invalid token policy")?;
    tracing::info!(
        policy = ?gate.policy(),
        "starting bearer gate in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::new(gate);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    fn test_config() -> Config {
        Config::from_vars(|key| match key {
            "TOKEN_PASSWORD" => Some("this is a test".to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn app() -> Router {
        let config = test_config();
        let gate = build_credential_gate(&config).unwrap();
        build_router(AppState::new(gate), &config)
    }

    async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_is_open() {
        let (status, _, body) = send(
            Request::get("/api/v1/health").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""status":"ok""#), "{body}");
    }

    #[tokio::test]
    async fn protected_requires_token() {
        let (status, headers, body) = send(
            Request::get("/api/v1/protected").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, r#"{"message":"Missing auth token."}"#);
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.contains_key("x-request-id"));
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    }

    #[tokio::test]
    async fn protected_with_valid_token() {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &json!({}),
            &EncodingKey::from_secret(b"this is a test"),
        )
        .unwrap();

        let (status, _, body) = send(
            Request::get("/api/v1/protected")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"got through protection"}"#);
    }

    #[tokio::test]
    async fn request_id_is_propagated() {
        let (_, headers, _) = send(
            Request::get("/api/v1/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(headers.get("x-request-id").unwrap(), "req-123");
    }
}
