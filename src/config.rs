//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GAME_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_RELAY_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RELAY_CONNECT_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("GAME_SERVER_URL must start with http:// or https://, got {0:?}")]
    InvalidGameServerUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

impl Default for RelayTimeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(DEFAULT_RELAY_REQUEST_TIMEOUT_SECS),
            connect: Duration::from_secs(DEFAULT_RELAY_CONNECT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub game_server_url: String,
    pub static_dir: PathBuf,
    pub timeouts: RelayTimeouts,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// All optional:
    /// - `PORT`: default 3000
    /// - `GAME_SERVER_URL`: default `http://127.0.0.1:5000`
    /// - `STATIC_DIR`: default `static`
    /// - `RELAY_REQUEST_TIMEOUT_SECS`: default 10
    /// - `RELAY_CONNECT_TIMEOUT_SECS`: default 3
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let game_server_url = lookup("GAME_SERVER_URL")
            .unwrap_or_else(|| DEFAULT_GAME_SERVER_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(game_server_url.starts_with("http://") || game_server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidGameServerUrl(game_server_url));
        }

        let static_dir = PathBuf::from(lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()));

        let timeouts = RelayTimeouts {
            request: Duration::from_secs(parse_secs(
                lookup("RELAY_REQUEST_TIMEOUT_SECS").as_deref(),
                DEFAULT_RELAY_REQUEST_TIMEOUT_SECS,
            )),
            connect: Duration::from_secs(parse_secs(
                lookup("RELAY_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_RELAY_CONNECT_TIMEOUT_SECS,
            )),
        };

        Ok(Self { port, game_server_url, static_dir, timeouts })
    }
}

/// Positive whole seconds, or `default` for anything else.
fn parse_secs(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}
