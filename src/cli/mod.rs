//! Command-line interface for stream volumes and configuration.
//!
//! Commands are organized by category and generate their help text from
//! metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;


pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
