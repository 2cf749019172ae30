//! # wv-config
//!
//! Layered configuration loading for WagerVS intel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WAGERVS_*` prefix, `__` as separator)
//! 2. Project-level `.wagervs/config.toml`
//! 3. User-level `~/.config/wagervs/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WAGERVS_API__BASE_URL` -> `api.base_url`,
//! `WAGERVS_MOCK__CATALOG_PATH` -> `mock.catalog_path`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use wv_config::WagerConfig;
//!
//! let config = WagerConfig::load_with_dotenv().expect("config");
//!
//! if config.api.is_remote() {
//!     println!("AI service: {}", config.api.base_url);
//! }
//! ```

mod api;
mod error;
mod general;
mod mock;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use mock::MockConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wv_core::Level;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WagerConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl WagerConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on extraction failure, or
    /// [`ConfigError::InvalidValue`] if validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".wagervs/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("WAGERVS_").split("__"))
    }

    /// Check cross-field constraints that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_level()?;

        if self.api.is_remote() {
            if self.api.base_url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "api.base_url".into(),
                    reason: "must be set when api.use_mock is false".into(),
                });
            }
            if self.api.timeout_secs == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "api.timeout_secs".into(),
                    reason: "must be greater than zero".into(),
                });
            }
        }

        Ok(())
    }

    /// The configured default level as a checked [`Level`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `general.default_level` is not 1-4.
    pub fn default_level(&self) -> Result<Level, ConfigError> {
        Level::try_from(i64::from(self.general.default_level)).map_err(|e| {
            ConfigError::InvalidValue {
                field: "general.default_level".into(),
                reason: e.to_string(),
            }
        })
    }

    /// Catalog path for the local service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if `mock.catalog_path` is empty.
    pub fn require_catalog_path(&self) -> Result<PathBuf, ConfigError> {
        if self.mock.is_configured() {
            Ok(PathBuf::from(&self.mock.catalog_path))
        } else {
            Err(ConfigError::NotConfigured {
                section: "mock".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wagervs").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
