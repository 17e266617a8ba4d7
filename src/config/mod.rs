//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `INKGATE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use inkgate::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod payment;
mod server;
mod sms;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::ServerConfig;
pub use sms::{SmsConfig, SmsProvider};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Payment configuration (Stripe)
    pub payment: PaymentConfig,

    /// SMS configuration (console or Twilio)
    #[serde(default)]
    pub sms: SmsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file if present, then environment variables with
    /// the `INKGATE` prefix. Nested values use `__`:
    ///
    /// - `INKGATE__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `INKGATE__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when required variables are missing or
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("INKGATE").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.payment.validate()?;
        self.sms.validate()?;
        Ok(())
    }
}
