// Runtime configuration read from the environment (a `.env` file is honoured by main).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "MERGINGTON_HOST";
pub const PORT_VAR: &str = "MERGINGTON_PORT";
pub const STATIC_DIR_VAR: &str = "MERGINGTON_STATIC_DIR";
pub const SEED_PATH_VAR: &str = "MERGINGTON_SEED_PATH";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an IP address, got {value:?}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Seed directory file; the built-in seed is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let lookup = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let host = match lookup(HOST_VAR) {
            Some(value) => {
                value
                    .trim()
                    .parse::<IpAddr>()
                    .map_err(|_| ConfigError::InvalidHost {
                        var: HOST_VAR,
                        value,
                    })?
            }
            None => defaults.host,
        };
        let port = match lookup(PORT_VAR) {
            Some(value) => {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort {
                        var: PORT_VAR,
                        value,
                    })?
            }
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            static_dir: lookup(STATIC_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_path: lookup(SEED_PATH_VAR).map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
