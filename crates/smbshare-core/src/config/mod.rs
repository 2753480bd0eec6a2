//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod logging;
pub mod samba;
pub mod store;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::samba::SambaConfig;
pub use self::store::StoreConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "SMBSHARE";

/// Root application configuration.
///
/// Top-level deserialization target for the TOML configuration file
/// merged with `SMBSHARE__*` environment variables. Every section has
/// defaults, so an empty or missing file yields a usable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Share list persistence settings.
    pub store: StoreConfig,
    /// Generated Samba configuration settings.
    pub samba: SambaConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Values are overridden by environment variables
    /// prefixed with `SMBSHARE__` (e.g. `SMBSHARE__SERVER__PORT=9000`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate every section against its declared bounds.
    pub fn validate(&self) -> Result<(), AppError> {
        self.server.validate()?;
        self.store.validate()?;
        self.samba.validate()?;
        Ok(())
    }
}
