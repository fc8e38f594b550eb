use std::{
    env, fs,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Locations of devaudio's configuration, data and log files
///
/// Configuration follows the XDG Base Directory layout; persisted properties
/// and logs live under `~/.devaudio`.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "devaudio" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join("devaudio"))
    }

    /// Returns the application data directory, creating it if needed
    ///
    /// # Errors
    /// Returns an error if HOME is not set or the directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        let app_dir = env::var("HOME")
            .map(|home| PathBuf::from(home).join(".devaudio"))
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir)
    }

    /// Returns the log directory, creating it if needed
    ///
    /// # Errors
    /// Returns error if the directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::app_data_dir()?.join("logs");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    /// Returns the path to the main configuration file
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default path of the persisted property file
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be determined or created
    pub fn property_file() -> Result<PathBuf, Error> {
        Ok(Self::app_data_dir()?.join("properties.toml"))
    }
}
