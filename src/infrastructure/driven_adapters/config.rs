//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::fmt;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::application::use_cases::DEFAULT_TIMEOUT;
use crate::shared::pagination::PageLimits;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Empty means any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// HMAC secret, wiped from memory on drop
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct JwtSecret(String);

impl JwtSecret {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JwtSecret([REDACTED])")
    }
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: JwtSecret,
    pub expires_in_secs: i64,
}

/// Use-case execution settings
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct UseCaseConfig {
    pub timeout_secs: u64,
}

impl Default for UseCaseConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl UseCaseConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Per-client request quota
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub enabled: bool,
    /// Sustained requests per second per client IP
    pub requests_per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests_per_second: 10,
            burst_size: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            filter: "backoffice_catalog=info,tower_http=info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub use_case: UseCaseConfig,
    #[serde(default)]
    pub pagination: PageLimits,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns an error when `config/default` is missing or a value does not
    /// deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            .add_source(File::with_name("config/default").required(true))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // APP__SERVER__PORT=8081, APP__JWT__SECRET=...
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// Configuration for unit tests that never touch the network
#[cfg(test)]
pub(crate) fn test_config(jwt: JwtConfig) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: Vec::new(),
        },
        database: DatabaseConfig {
            url: "postgres://localhost/unused".to_string(),
            max_connections: 1,
            min_connections: 0,
        },
        jwt,
        use_case: UseCaseConfig::default(),
        pagination: PageLimits::default(),
        rate_limit: RateLimitConfig {
            enabled: false,
            ..RateLimitConfig::default()
        },
        logging: LoggingConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const MINIMAL: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 8080

        [database]
        url = "postgres://localhost/catalog"
        max_connections = 5
        min_connections = 1

        [jwt]
        secret = "not-a-real-secret"
        expires_in_secs = 3600
    "#;

    fn parse(source: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_optional_sections_fall_back_to_defaults() {
        let config = parse(MINIMAL);

        assert_eq!(config.use_case.timeout(), Duration::from_secs(60));
        assert_eq!(config.pagination, PageLimits::default());
        assert!(config.rate_limit.enabled);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.server.allowed_origins.is_empty());
    }

    #[test]
    fn test_overrides_are_applied() {
        let source = format!(
            "{MINIMAL}\n[use_case]\ntimeout_secs = 5\n[pagination]\nmax_size_page = 50\n[logging]\nformat = \"pretty\"\n"
        );
        let config = parse(&source);

        assert_eq!(config.use_case.timeout(), Duration::from_secs(5));
        assert_eq!(config.pagination.max_size_page, 50);
        assert_eq!(config.pagination.default_size_page, 10);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_secret_is_redacted_in_debug_output() {
        let config = parse(MINIMAL);

        let rendered = format!("{:?}", config.jwt);
        assert!(!rendered.contains("not-a-real-secret"));
        assert!(rendered.contains("REDACTED"));
        assert_eq!(config.jwt.secret.as_bytes(), b"not-a-real-secret");
    }
}
