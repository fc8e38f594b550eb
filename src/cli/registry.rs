use std::{collections::HashMap, sync::Arc};

use crate::{config_store::ConfigStore, service_manager::Services};

use super::{
    CliError, Command,
    commands::{audio, config},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// ```text
/// registry
/// ├── audio
/// │   ├── get
/// │   ├── mute
/// │   ├── set
/// │   ├── shaper
/// │   ├── status
/// │   └── streams
/// └── config
///     ├── get
///     └── schema
/// ```
pub struct CommandRegistry {
    /// category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    config_store: Arc<ConfigStore>,
    services: Services,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands are added with `register_command` or `register_all_commands`.
    pub fn new(config_store: Arc<ConfigStore>, services: Services) -> Self {
        Self {
            categories: HashMap::new(),
            config_store,
            services,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key within the category; an
    /// existing command with the same name is replaced.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or command doesn't
    /// exist, `CliError::InvalidArguments` if the argument count doesn't match
    /// the command's metadata. Other errors come from the command itself.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        self.list_metadata()
            .into_iter()
            .map(|(category, commands)| {
                (
                    category,
                    commands.into_iter().map(|metadata| metadata.name).collect(),
                )
            })
            .collect()
    }

    /// Metadata of all registered commands, sorted like `list_commands`
    pub fn list_metadata(&self) -> Vec<(String, Vec<CommandMetadata>)> {
        let mut categories: Vec<(String, Vec<CommandMetadata>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut metadata: Vec<CommandMetadata> =
                    commands.values().map(|command| command.metadata()).collect();
                metadata.sort_by(|a, b| a.name.cmp(&b.name));

                (category.clone(), metadata)
            })
            .collect();

        categories.sort_by(|a, b| a.0.cmp(&b.0));

        categories
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {} (usage: {})",
                required_count,
                args.len(),
                metadata.usage(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {} (usage: {})",
                total_count,
                args.len(),
                metadata.usage(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let config_store = self.config_store.clone();
        let services = self.services.clone();

        audio::register_commands(self, &services);
        config::register_commands(self, config_store);
    }
}
