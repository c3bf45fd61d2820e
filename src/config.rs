/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, CORS 許可, token 検証の設定など)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - secret はここで一度だけ読み、以降は Config 経由で注入する
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::services::auth::policy::{self, DEFAULT_LEEWAY_SECONDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Process configuration.
///
/// No `Debug` on purpose: `token_secret` must never end up in logs.
pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub token_secret: Vec<u8>,
    pub token_algorithms: Vec<Algorithm>,
    pub token_leeway_seconds: u64,

    pub request_body_limit_bytes: usize,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the process env in production).
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(var("APP_ENV"));

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        // `token_password` は旧来のキー名。大文字を優先する
        let token_secret = var("TOKEN_PASSWORD")
            .or_else(|| var("token_password"))
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("TOKEN_PASSWORD"))?
            .into_bytes();

        let token_algorithms = match var("TOKEN_ALGORITHMS") {
            Some(raw) => parse_algorithms(&raw)?,
            None => policy::HMAC_ALGORITHMS.to_vec(),
        };

        let token_leeway_seconds = match var("TOKEN_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("TOKEN_LEEWAY_SECONDS"))?,
            None => DEFAULT_LEEWAY_SECONDS,
        };

        let request_body_limit_bytes = match var("REQUEST_BODY_LIMIT_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"))?,
            None => 1024 * 1024,
        };

        // 0 秒の timeout は全リクエストを即座に落とすので不正値扱い
        let request_timeout_seconds = match var("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => 30,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            token_secret,
            token_algorithms,
            token_leeway_seconds,
            request_body_limit_bytes,
            request_timeout_seconds,
        })
    }
}

fn parse_algorithms(raw: &str) -> Result<Vec<Algorithm>, ConfigError> {
    let mut algorithms = Vec::new();

    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let alg =
            Algorithm::from_str(name).map_err(|_| ConfigError::Invalid("TOKEN_ALGORITHMS"))?;
        if !policy::is_hmac(alg) {
            return Err(ConfigError::Invalid("TOKEN_ALGORITHMS"));
        }
        if !algorithms.contains(&alg) {
            algorithms.push(alg);
        }
    }

    if algorithms.is_empty() {
        return Err(ConfigError::Invalid("TOKEN_ALGORITHMS"));
    }

    Ok(algorithms)
}
