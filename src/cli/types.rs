use thiserror::Error;

use crate::services::audio::AudioError;

/// Errors that can occur during CLI command execution.
///
/// Each variant carries enough context for the user to see what went wrong.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument validation fails, such as missing required
    /// arguments, too many arguments, or values that don't parse.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred reading the configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The stream registry refused or failed an operation.
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// All CLI commands return either their output text or a `CliError`.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "stream", "level", "path").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for validation and help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
///
/// Shown in help text as a hint about the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value (integer or float).
    Number,

    /// A boolean value (on/off, true/false).
    Boolean,

    /// A configuration path.
    Path,

    /// A stream given by native id or catalog name.
    Stream,
}

impl ArgType {
    /// Short label used in help output
    pub fn label(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Number => "number",
            ArgType::Boolean => "on|off",
            ArgType::Path => "path",
            ArgType::Stream => "id|name",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// Single source of truth for a command's identity, arguments, usage
/// examples and category. Used for help generation and argument validation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "get", "set", "schema").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "audio", "config").
    pub category: String,
}

impl CommandMetadata {
    /// One-line usage, e.g. `audio set <level> [stream]`
    pub fn usage(&self) -> String {
        let mut usage = format!("{} {}", self.category, self.name);

        for arg in &self.args {
            if arg.required {
                usage.push_str(&format!(" <{}>", arg.name));
            } else {
                usage.push_str(&format!(" [{}]", arg.name));
            }
        }

        usage
    }
}

/// Interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata; the command validates the values.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values, configuration lookups
    /// that find nothing, and registry failures.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
