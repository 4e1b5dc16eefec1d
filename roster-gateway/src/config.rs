//! Runtime configuration read from the environment.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const LISTEN_ADDR_VAR: &str = "ROSTER_LISTEN_ADDR";

/// Address used when [`LISTEN_ADDR_VAR`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Errors raised while loading [`GatewayConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The listen address could not be parsed as `host:port`.
    #[error("invalid listen address '{value}': {source}")]
    InvalidListenAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Gateway settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the HTTP server binds to.
    pub listen_addr: SocketAddr,
}

impl GatewayConfig {
    /// Load settings from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidListenAddr`] if `ROSTER_LISTEN_ADDR` is set
    /// to something that is not a socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_listen_addr(std::env::var(LISTEN_ADDR_VAR).ok().as_deref())
    }

    fn from_listen_addr(value: Option<&str>) -> Result<Self, ConfigError> {
        let value = value.unwrap_or(DEFAULT_LISTEN_ADDR);
        let listen_addr = value
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: value.to_owned(),
                source,
            })?;
        Ok(Self { listen_addr })
    }
}
