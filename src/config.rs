//! Runtime configuration loaded from environment variables.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `TODO_STORAGE_MODE` | `postgres` or `in_memory` | `postgres` |
//! | `TODO_DATABASE_URL` | connection string, may contain `${TODO_DB_PASSWORD}` | required for `postgres` |
//! | `TODO_DB_PASSWORD` | value substituted into the connection string | none |
//! | `TODO_DB_POOL_SIZE` | maximum pooled connections | `10` |
//! | `TODO_HOST` | listen address | `0.0.0.0` |
//! | `TODO_PORT` | listen port | `8080` |

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

/// Placeholder replaced by the database password at startup.
pub const PASSWORD_PLACEHOLDER: &str = "${TODO_DB_PASSWORD}";

const STORAGE_MODE_VAR: &str = "TODO_STORAGE_MODE";
const DATABASE_URL_VAR: &str = "TODO_DATABASE_URL";
const PASSWORD_VAR: &str = "TODO_DB_PASSWORD";
const POOL_SIZE_VAR: &str = "TODO_DB_POOL_SIZE";
const HOST_VAR: &str = "TODO_HOST";
const PORT_VAR: &str = "TODO_PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The storage mode is not recognised.
    #[error("invalid TODO_STORAGE_MODE '{0}', expected 'postgres' or 'in_memory'")]
    InvalidStorageMode(String),

    /// Postgres storage was selected without a connection string.
    #[error("TODO_DATABASE_URL is required when TODO_STORAGE_MODE=postgres")]
    MissingDatabaseUrl,

    /// The connection string expects a password that was not provided.
    #[error("TODO_DATABASE_URL references ${{TODO_DB_PASSWORD}} but TODO_DB_PASSWORD is not set")]
    MissingPassword,

    /// A numeric or address variable could not be parsed.
    #[error("invalid value '{value}' for {name}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Backing store selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageMode {
    /// Relational store through Diesel.
    #[default]
    Postgres,
    /// Process-local store, lost on restart.
    InMemory,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "in_memory" | "memory" => Ok(Self::InMemory),
            _ => Err(ConfigError::InvalidStorageMode(value.to_owned())),
        }
    }
}

/// Application configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Selected backing store.
    pub storage_mode: StorageMode,
    /// Connection string with the password already substituted.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_size: u32,
    /// Address the HTTP server binds to.
    pub bind_address: SocketAddr,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("storage_mode", &self.storage_mode)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("pool_size", &self.pool_size)
            .field("bind_address", &self.bind_address)
            .finish()
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is invalid or a required one
    /// is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is invalid or a required one
    /// is missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let storage_mode = read(STORAGE_MODE_VAR)
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();

        let database_url = match (storage_mode, read(DATABASE_URL_VAR)) {
            (StorageMode::Postgres, None) => return Err(ConfigError::MissingDatabaseUrl),
            (StorageMode::Postgres, Some(template)) => Some(substitute_password(
                &template,
                lookup(PASSWORD_VAR).as_deref(),
            )?),
            (StorageMode::InMemory, _) => None,
        };

        let pool_size = parse_or(POOL_SIZE_VAR, read(POOL_SIZE_VAR), DEFAULT_POOL_SIZE)?;
        let host = parse_or(HOST_VAR, read(HOST_VAR), DEFAULT_HOST)?;
        let port = parse_or(PORT_VAR, read(PORT_VAR), DEFAULT_PORT)?;

        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: POOL_SIZE_VAR,
                value: "0".to_owned(),
            });
        }

        Ok(Self {
            storage_mode,
            database_url,
            pool_size,
            bind_address: SocketAddr::new(host, port),
        })
    }
}

/// Replaces every `${TODO_DB_PASSWORD}` in `template` with `password`.
///
/// A template without the placeholder is returned unchanged.
///
/// # Errors
///
/// Returns [`ConfigError::MissingPassword`] when the template contains the
/// placeholder and no password is available.
pub fn substitute_password(template: &str, password: Option<&str>) -> Result<String, ConfigError> {
    if !template.contains(PASSWORD_PLACEHOLDER) {
        return Ok(template.to_owned());
    }
    let secret = password.ok_or(ConfigError::MissingPassword)?;
    Ok(template.replace(PASSWORD_PLACEHOLDER, secret))
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    value.map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw })
    })
}
