//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A `.env` file in the working directory is read first, if
//! present; variables already set in the environment win.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use kasir_db::DbConfig;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP port
    pub port: u16,

    /// Address to bind the listener to
    pub bind_addr: String,

    /// SQLite database file
    pub db_path: PathBuf,

    /// Connection pool size
    pub db_max_connections: u32,

    /// Pool acquire timeout in seconds
    pub db_connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: 8080,
            bind_addr: "0.0.0.0".to_string(),
            db_path: PathBuf::from("kasir.db"),
            db_max_connections: 5,
            db_connect_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Load configuration from `.env` and environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            port: parse_or(&lookup, "PORT", defaults.port)?,

            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),

            db_path: lookup("DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path),

            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?,

            db_connect_timeout_secs: parse_or(
                &lookup,
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.db_connect_timeout_secs,
            )?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BIND_ADDR".to_string()))
    }

    /// Database configuration derived from these settings.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path)
            .max_connections(self.db_max_connections)
            .connect_timeout(Duration::from_secs(self.db_connect_timeout_secs))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
