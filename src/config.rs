//! Server configuration loaded from environment variables.
//!
//! All variables are optional:
//! - `STOCKROOM_INVENTORY_FILE` - product file path (default: `data/inventory.json`)
//! - `STOCKROOM_USERS_FILE` - account file path (default: `data/users.json`)
//! - `STOCKROOM_HOST` - bind address (default: `127.0.0.1`)
//! - `STOCKROOM_PORT` - listen port (default: `8080`)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_INVENTORY_FILE: &str = "data/inventory.json";
const DEFAULT_USERS_FILE: &str = "data/users.json";
const DEFAULT_PORT: u16 = 8080;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the product store's JSON file.
    pub inventory_file: PathBuf,
    /// Path of the account store's JSON file.
    pub users_file: PathBuf,
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let inventory_file = std::env::var("STOCKROOM_INVENTORY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_INVENTORY_FILE));
        let users_file = std::env::var("STOCKROOM_USERS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_USERS_FILE));

        let host = match std::env::var("STOCKROOM_HOST") {
            Ok(raw) => raw.parse::<IpAddr>().map_err(|e| {
                ConfigError::InvalidEnvVar("STOCKROOM_HOST".into(), e.to_string())
            })?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match std::env::var("STOCKROOM_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("STOCKROOM_PORT".into(), e.to_string())
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            inventory_file,
            users_file,
            host,
            port,
        })
    }

    /// The socket address to serve on.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
