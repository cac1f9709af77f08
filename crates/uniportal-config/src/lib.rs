//! # uniportal-config
//!
//! Layered configuration loading for the portal client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`UNIPORTAL_*` prefix, `__` as separator)
//! 2. Project-level `.uniportal/config.toml`
//! 3. User-level `~/.config/uniportal/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `UNIPORTAL_API__BASE_URL` -> `api.base_url`,
//! `UNIPORTAL_REGISTRATION__REDIRECT_DELAY_MS` -> `registration.redirect_delay_ms`.
//!
//! # Usage
//!
//! ```no_run
//! use uniportal_config::PortalConfig;
//!
//! let config = PortalConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;
mod registration;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use registration::RegistrationConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PortalConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.normalized_base_url()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if any), then everything else.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect it or stack extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".uniportal/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("UNIPORTAL_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("uniportal").join("config.toml"))
    }
}
