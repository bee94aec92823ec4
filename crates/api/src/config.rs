use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Duration, Utc};
use respawn_core::catalog::BossCatalog;
use respawn_core::credentials::CredentialTable;
use respawn_core::error::CoreError;

/// Startup configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidVar {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Failed to read boss catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid boss catalog: {0}")]
    Catalog(#[source] CoreError),

    #[error("Invalid CLAN_USERS: {0}")]
    Credentials(#[source] CoreError),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the clan's setup
/// locally. The boss catalog and credential table are built once here and
/// shared read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins for the JSON endpoints.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Path of the JSON timer file (default: `bosses.json`).
    pub timers_file: PathBuf,
    /// Session lifetime (default: 720 minutes).
    pub session_ttl: Duration,
    /// Mark cookies `Secure` (default: `false`).
    pub cookie_secure: bool,
    pub catalog: Arc<BossCatalog>,
    pub credentials: Arc<CredentialTable>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `TIMERS_FILE`          | `bosses.json`              |
    /// | `BOSS_CATALOG_FILE`    | built-in catalog           |
    /// | `CLAN_USERS`           | built-in `user:pass` list  |
    /// | `SESSION_TTL_MINS`     | `720`                      |
    /// | `COOKIE_SECURE`        | `false`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");
        let port: u16 = parse_env("PORT", "3000", "u16")?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_env("REQUEST_TIMEOUT_SECS", "30", "u64")?;
        let timers_file = PathBuf::from(env_or("TIMERS_FILE", "bosses.json"));

        let session_ttl = session_ttl(parse_env("SESSION_TTL_MINS", "720", "i64")?)?;

        let cookie_secure: bool = parse_env("COOKIE_SECURE", "false", "bool")?;

        let catalog = match std::env::var("BOSS_CATALOG_FILE") {
            Ok(path) if !path.trim().is_empty() => load_catalog(PathBuf::from(path))?,
            _ => BossCatalog::default(),
        };

        let credentials = match std::env::var("CLAN_USERS") {
            Ok(spec) if !spec.trim().is_empty() => {
                CredentialTable::parse(&spec).map_err(ConfigError::Credentials)?
            }
            _ => CredentialTable::default(),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            timers_file,
            session_ttl,
            cookie_secure,
            catalog: Arc::new(catalog),
            credentials: Arc::new(credentials),
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.into())
}

fn parse_env<T: std::str::FromStr>(
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = env_or(var, default);
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidVar {
            var,
            expected,
            value,
        })
}

/// Session lifetime from `SESSION_TTL_MINS`. Must be positive and keep
/// expiry times within the representable date range.
fn session_ttl(mins: i64) -> Result<Duration, ConfigError> {
    Duration::try_minutes(mins)
        .filter(|ttl| mins > 0 && Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or_else(|| ConfigError::InvalidVar {
            var: "SESSION_TTL_MINS",
            expected: "positive number of minutes within the supported date range",
            value: mins.to_string(),
        })
}

fn load_catalog(path: PathBuf) -> Result<BossCatalog, ConfigError> {
    let json = std::fs::read_to_string(&path)
        .map_err(|source| ConfigError::CatalogRead { path: path.clone(), source })?;
    let catalog = BossCatalog::from_json(&json).map_err(ConfigError::Catalog)?;
    tracing::info!(path = %path.display(), bosses = catalog.len(), "Loaded boss catalog");
    Ok(catalog)
}
