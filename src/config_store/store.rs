use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    DevaudioError, Result,
    config::{Config, ConfigPaths},
    path_ops::{self, PathExpr},
    services::audio::default_volume_from,
};

/// Configuration loaded from a TOML file
///
/// The raw document is held as a JSON value tree for path lookups; the typed
/// view is derived from the same document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: Config,
    document: Value,
    source: Option<PathBuf>,
}

impl ConfigStore {
    /// Creates a store holding the default configuration
    pub fn with_defaults() -> Self {
        let config = Config::default();
        let document = serde_json::to_value(&config).unwrap_or(Value::Null);

        Self {
            config,
            document,
            source: None,
        }
    }

    /// Loads the main configuration file, creating it if missing
    ///
    /// # Errors
    /// Returns error if the config location cannot be determined, or the file
    /// cannot be created, read or parsed
    pub fn load() -> Result<Self> {
        let main_config = ConfigPaths::main_config()?;
        Self::load_from(&main_config)
    }

    /// Loads configuration from `path`, creating a default file if missing
    ///
    /// # Errors
    /// Returns error if the file cannot be created, read or parsed, or if a
    /// key known to the typed schema has the wrong type
    #[instrument(fields(path = %path.display()))]
    pub fn load_from(path: &Path) -> Result<Self> {
        let document = Config::read_document(path)?;
        let mut store = Self::from_document(document)?;
        store.source = Some(path.to_path_buf());

        debug!("Configuration loaded");
        Ok(store)
    }

    /// Builds a store from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML or does not match the typed schema
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_document(Config::parse_document(content, None)?)
    }

    fn from_document(document: toml::Value) -> Result<Self> {
        let config = Config::from_document(&document)?;
        let document =
            serde_json::to_value(&document).map_err(|e| DevaudioError::ConfigValidation {
                component: "config document".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self {
            config,
            document,
            source: None,
        })
    }

    /// Typed configuration
    pub fn get_current(&self) -> &Config {
        &self.config
    }

    /// Value at a dotted path of the raw document, `None` when nothing is there
    pub fn get_by_path(&self, path: impl Into<PathExpr>) -> Option<&Value> {
        path_ops::resolve(Some(&self.document), path)
    }

    /// Raw document as a value tree
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Default stream volume configured at `audio.volume.default`
    pub fn default_volume(&self) -> u8 {
        default_volume_from(Some(&self.document))
    }

    /// File the configuration was loaded from
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
