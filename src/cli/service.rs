use std::sync::Arc;

use crate::{config_store::ConfigStore, service_manager::Services};

use super::{
    CliError, CommandRegistry,
    formatting::{format_category, format_command, format_description, format_header, format_usage},
};

/// High-level service for managing and executing CLI commands.
///
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    pub fn new(config_store: ConfigStore, services: Services) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(config_store), services);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the
    /// category, or whatever error the command itself fails with.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        self.registry.execute(category, command_name, args)
    }

    /// Lists all available commands as (category, command names) pairs.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Help text listing every category and command with its usage
    pub fn help(&self) -> String {
        let mut help = format!(
            "{}\n\n  devaudio <category> <command> [args...]\n",
            format_header("Usage")
        );

        for (category, commands) in self.registry.list_metadata() {
            help.push_str(&format!("\n{}\n", format_category(&category)));

            for metadata in commands {
                help.push_str(&format!(
                    "  {} {}\n",
                    format_command(&format!("{:<8}", metadata.name)),
                    format_description(&metadata.description)
                ));
                help.push_str(&format!(
                    "           {}\n",
                    format_usage(&format!("devaudio {}", metadata.usage()))
                ));

                for arg in &metadata.args {
                    help.push_str(&format!(
                        "             {:<8} {}\n",
                        format!("{} ({})", arg.name, arg.value_type.label()),
                        format_description(&arg.description)
                    ));
                }
            }
        }

        help
    }
}
