//! # sym-config
//!
//! Layered configuration loading for symcheck using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SYMCHECK_*` prefix, `__` as separator)
//! 2. Project-level `.symcheck/config.toml`
//! 3. User-level `~/.config/symcheck/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SYMCHECK_DATABASE__PATH` -> `database.path`,
//! `SYMCHECK_LOADER__ALLOW_LOAD_INTO_NONEMPTY` -> `loader.allow_load_into_nonempty`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sym_config::SymConfig;
//!
//! let config = SymConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod loader;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use loader::LoaderConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SymConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
}

impl SymConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".symcheck/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SYMCHECK_").split("__"))
    }

    /// Reject values that would only fail later at open/bind time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if let Err(e) = self.server.addr.parse::<SocketAddr>() {
            return Err(ConfigError::InvalidValue {
                field: "server.addr".into(),
                reason: e.to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("symcheck").join("config.toml"))
    }
}
