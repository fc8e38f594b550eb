use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_json_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ConfigStore,
};

/// Command for retrieving configuration values by dotted path.
///
/// Any path in the file can be queried, including keys the typed
/// configuration doesn't know about.
///
/// # Example Usage
///
/// ```bash
/// devaudio config get audio.shaper
/// devaudio config get audio.volume.default
/// ```
pub struct GetCommand {
    config_store: Arc<ConfigStore>,
}

impl GetCommand {
    /// Creates a new GetCommand with the provided config store.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self { config_store }
    }
}

impl Command for GetCommand {
    /// Retrieves and formats the value at the given path.
    ///
    /// # Errors
    ///
    /// * `CliError::ConfigError` - If nothing exists at the path
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'get' command".to_string())
        })?;

        let value = self
            .config_store
            .get_by_path(path)
            .ok_or_else(|| CliError::ConfigError(format!("No value at '{path}'")))?;

        Ok(format!("{}: {}", path, format_json_value(value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get configuration value".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: "Configuration path (e.g., audio.volume.default)".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec![
                "devaudio config get audio.shaper".to_string(),
                "devaudio config get general.log_level".to_string(),
                "devaudio config get audio.volume.default".to_string(),
            ],
        }
    }
}
