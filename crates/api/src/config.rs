use std::path::PathBuf;

use axum::http::HeaderValue;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Which origins may call the JSON API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`CORS_ORIGINS=*`, the default).
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Debug mode: human-readable logs at debug level. Off when `APP_ENV=production`.
    pub debug: bool,
    /// SQLite database URL (default: `sqlite://profile.db`).
    pub database_url: String,
    /// Maximum pooled database connections (default: `5`).
    pub db_max_connections: u32,
    /// Origins allowed by the CORS layer.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the frontend entry page `index.html`.
    pub template_dir: PathBuf,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `5000`                  |
    /// | `APP_ENV`              | `development`           |
    /// | `DATABASE_URL`         | `sqlite://profile.db`   |
    /// | `DB_MAX_CONNECTIONS`   | `5`                     |
    /// | `CORS_ORIGINS`         | `*`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `TEMPLATE_DIR`         | `frontend/templates`    |
    /// | `STATIC_DIR`           | `frontend/static`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_number("PORT", &var("PORT", "5000"), "u16")?;
        let debug = !var("APP_ENV", "development")
            .trim()
            .eq_ignore_ascii_case("production");
        let database_url = var("DATABASE_URL", "sqlite://profile.db");
        let db_max_connections =
            parse_number("DB_MAX_CONNECTIONS", &var("DB_MAX_CONNECTIONS", "5"), "u32")?;
        let cors_origins = parse_origins(&var("CORS_ORIGINS", "*"))?;
        let request_timeout_secs = parse_number(
            "REQUEST_TIMEOUT_SECS",
            &var("REQUEST_TIMEOUT_SECS", "30"),
            "u64",
        )?;
        let template_dir = PathBuf::from(var("TEMPLATE_DIR", "frontend/templates"));
        let static_dir = PathBuf::from(var("STATIC_DIR", "frontend/static"));

        Ok(Self {
            host,
            port,
            debug,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            template_dir,
            static_dir,
        })
    }

    /// Tracing filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "folio_api=debug,folio_db=debug,tower_http=debug"
        } else {
            "folio_api=info,folio_db=info,tower_http=info"
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        expected,
        value: value.to_string(),
    })
}

/// Parse a comma-separated origin list. `*` anywhere (or an empty list) means any origin.
fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.to_string())))
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
