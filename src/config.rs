//! Application configuration management
//!
//! Configuration is read from environment variables (and an optional `.env`)
//! by the server binary only. The analysis core takes no configuration.

use std::env;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_MAX_BODY_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Request limits applied at the HTTP boundary
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    /// Maximum accepted request body in bytes
    pub max_body_bytes: usize,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            limits: LimitsConfig::from_env()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                rust_log: "info".to_string(),
            },
            limits: LimitsConfig {
                max_body_bytes: DEFAULT_MAX_BODY_BYTES,
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
        }
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl LimitsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            max_body_bytes: parse_var("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
        })
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
