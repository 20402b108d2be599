//! Catalog configuration management.

use std::path::Path;

use serde::Deserialize;

use crate::types::Currency;

/// Catalog configuration.
///
/// When `currencies` is absent the built-in table is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Currencies to expose, in presentation order.
    #[serde(default)]
    pub currencies: Option<Vec<Currency>>,
}

impl CatalogConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `DIVISAS__*` variables.
    /// Reading a `.env` file is left to the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Like [`load`](Self::load), but reads the config files from `config_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_from(config_dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let default_file = config_dir.join("default");
        let mode_file = config_dir.join(&run_mode);

        let config = config::Config::builder()
            .add_source(config::File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&mode_file.to_string_lossy()).required(false))
            .add_source(config::Environment::with_prefix("DIVISAS").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has the wrong shape.
    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
