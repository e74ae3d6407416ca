//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 1000;
pub const DEFAULT_GAME: &str = "oblivion";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Simulated processing time before a build reply is sent.
    pub response_delay: Duration,
    pub default_game: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3001
    /// - `BUILDCRAFT_RESPONSE_DELAY_MS`: default 1000
    /// - `BUILDCRAFT_DEFAULT_GAME`: default `oblivion`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    /// A malformed delay falls back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };

        let delay_ms = env_parse("BUILDCRAFT_RESPONSE_DELAY_MS", DEFAULT_RESPONSE_DELAY_MS);
        let default_game = std::env::var("BUILDCRAFT_DEFAULT_GAME")
            .ok()
            .map(|g| g.trim().to_ascii_lowercase())
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| DEFAULT_GAME.to_string());

        Ok(Self { port, response_delay: Duration::from_millis(delay_ms), default_game })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            response_delay: Duration::from_millis(DEFAULT_RESPONSE_DELAY_MS),
            default_game: DEFAULT_GAME.to_string(),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
