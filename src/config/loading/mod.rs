mod file_creation;

use std::{fs, path::Path};

use file_creation::create_default_config_file;
use toml::{Table, Value};

use super::Config;
use crate::{DevaudioError, Result};

impl Config {
    /// Reads a configuration file into a raw TOML document
    ///
    /// A default file is written first if none exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The default file cannot be created
    /// - The file cannot be read
    /// - The TOML content is invalid
    pub fn read_document(path: &Path) -> Result<Value> {
        if !path.exists() {
            create_default_config_file(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| DevaudioError::IoError {
            path: path.to_path_buf(),
            details: format!("Failed to read config: {e}"),
        })?;

        Self::parse_document(&content, Some(path))
    }

    /// Parses TOML text into a raw document
    ///
    /// # Arguments
    /// * `content` - TOML text
    /// * `path` - File the text came from, for error messages
    ///
    /// # Errors
    /// Returns `DevaudioError::TomlParseError` if the content is invalid
    pub fn parse_document(content: &str, path: Option<&Path>) -> Result<Value> {
        let table: Table =
            toml::from_str(content).map_err(|e| DevaudioError::toml_parse(e, path))?;

        Ok(Value::Table(table))
    }

    /// Builds the typed configuration from a raw document
    ///
    /// Keys the typed schema does not know are ignored.
    ///
    /// # Errors
    /// Returns `DevaudioError::ConfigValidation` if a known key has the wrong type
    pub fn from_document(document: &Value) -> Result<Config> {
        document
            .clone()
            .try_into()
            .map_err(|e| DevaudioError::ConfigValidation {
                component: "config parsing".to_string(),
                details: format!("Configuration validation failed: {e}"),
            })
    }
}
