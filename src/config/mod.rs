//! Application configuration module
//!
//! Configuration is read from environment variables (and a `.env` file when
//! present) with the `PADDOCK` prefix; nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use paddock::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod listing;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use listing::ListingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL; absent means in-memory stores
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub listing: ListingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `PADDOCK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PADDOCK__DATABASE__URL=...` -> `database.url = ...`
    /// - `PADDOCK__LISTING__MAX_PAGE_SIZE=50` -> `listing.max_page_size = 50`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PADDOCK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.listing.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
