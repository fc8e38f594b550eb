use schemars::schema_for;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Command printing the JSON schema of the configuration file
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schema_for!(Config);

        serde_json::to_string_pretty(&schema)
            .map_err(|e| CliError::ConfigError(format!("Failed to render schema: {e}")))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema of config.toml".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["devaudio config schema".to_string()],
        }
    }
}
