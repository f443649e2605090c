/*
 * Responsibility
 * - 環境変数の読み込み (CLIENT_ID, LINE_VERIFY_URL, PORT など)
 * - 設定値のバリデーション (不足・不正なら起動失敗。リクエスト毎のエラーにはしない)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::middleware::http::REQUEST_TIMEOUT;

/// LINE Login ID token verification endpoint.
pub const DEFAULT_VERIFY_URL: &str = "https://api.line.me/oauth2/v2.1/verify";
/// Client-side bound on the verify call. Must stay below `REQUEST_TIMEOUT`
/// so a hanging provider still ends in a Deny decision, not a bare 408.
pub const DEFAULT_VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
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

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // LINE channel id, sent as `client_id` on every verification call
    pub client_id: String,
    pub verify_url: Url,
    pub verify_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let client_id = lookup("CLIENT_ID")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("CLIENT_ID"))?;

        let verify_url = match lookup("LINE_VERIFY_URL") {
            Some(s) => Url::parse(s.trim()).map_err(|_| ConfigError::Invalid("LINE_VERIFY_URL"))?,
            None => Url::parse(DEFAULT_VERIFY_URL)
                .map_err(|_| ConfigError::Invalid("LINE_VERIFY_URL"))?,
        };

        let verify_timeout = match lookup("VERIFY_TIMEOUT_SECONDS") {
            Some(s) => {
                let secs: u64 = s
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("VERIFY_TIMEOUT_SECONDS"))?;
                let timeout = Duration::from_secs(secs);
                if secs == 0 || timeout >= REQUEST_TIMEOUT {
                    return Err(ConfigError::Invalid("VERIFY_TIMEOUT_SECONDS"));
                }
                timeout
            }
            None => DEFAULT_VERIFY_TIMEOUT,
        };

        Ok(Config {
            addr,
            app_env,
            client_id,
            verify_url,
            verify_timeout,
        })
    }
}
