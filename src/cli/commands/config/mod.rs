//! Configuration inspection commands.
mod get;
mod schema;

use std::sync::Arc;

pub use get::GetCommand;
pub use schema::SchemaCommand;

use crate::{cli::CommandRegistry, config_store::ConfigStore};

/// Registers all configuration-related commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config_store` - Shared configuration store for the commands
pub fn register_commands(registry: &mut CommandRegistry, config_store: Arc<ConfigStore>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(config_store)));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
}
