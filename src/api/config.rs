//! Server configuration read from environment variables.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Log output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `HOST`
    pub host: IpAddr,
    /// `PORT`
    pub port: u16,
    /// `SEED_DATA`: populate seed environments and flags at boot
    pub seed_data: bool,
    /// `CORS_ALLOWED_ORIGINS`, comma separated. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    /// `LOG_FORMAT`: `text` or `json`
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            seed_data: true,
            cors_allowed_origins: Vec::new(),
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    /// Unset or empty variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = var("HOST") {
            config.host = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "HOST",
                expected: "an IP address",
                value,
            })?;
        }

        if let Some(value) = var("PORT") {
            config.port = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                expected: "a port number",
                value,
            })?;
        }

        if let Some(value) = var("SEED_DATA") {
            config.seed_data = parse_bool("SEED_DATA", value)?;
        }

        if let Some(value) = var("CORS_ALLOWED_ORIGINS") {
            config.cors_allowed_origins = value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(value) = var("LOG_FORMAT") {
            config.log_format = match value.trim().to_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "LOG_FORMAT",
                        expected: "`text` or `json`",
                        value,
                    });
                }
            };
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            expected: "a boolean",
            value,
        }),
    }
}
