//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is read with the
//! `FRONTDESK` prefix and nested values use `__` as the separator.
//!
//! # Example
//!
//! ```no_run
//! use frontdesk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod routing;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use routing::RoutingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has workable defaults: a bare environment yields a
/// deployment with all services enabled writing under `./data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Storage layout and write behavior
    #[serde(default)]
    pub storage: StorageConfig,

    /// Service routing (enabled set, fallback)
    #[serde(default)]
    pub routing: RoutingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads variables
    /// with the `FRONTDESK` prefix, e.g.:
    ///
    /// - `FRONTDESK__STORAGE__DATA_DIR=/var/lib/frontdesk`
    /// - `FRONTDESK__STORAGE__ATOMIC_WRITES=true`
    /// - `FRONTDESK__ROUTING__FALLBACK=chat`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FRONTDESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.routing.validate()?;
        Ok(())
    }
}
