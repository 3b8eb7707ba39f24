//! Server configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use tripcover_core::{Error, Result};

/// Configuration for the HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "127.0.0.1:8080";

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let raw = env::var("BIND_ADDR").unwrap_or_else(|_| Self::DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw.parse().map_err(|_| {
            Error::Configuration(format!("BIND_ADDR is not a valid socket address: {raw:?}"))
        })?;

        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr_parses() {
        let addr: SocketAddr = ServerConfig::DEFAULT_BIND_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 8080);
    }
}
