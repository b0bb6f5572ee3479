use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when the argument count does not match the command's
    /// metadata, or an argument has the wrong format.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A settings path or name could not be resolved.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Commands return their rendered output on success.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "path", "name").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument, shown in help text.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A dotted path into the settings tree.
    Path,

    /// Comma-separated `key=value` pairs.
    Assignments,
}

/// Complete metadata for a CLI command.
///
/// The registry validates argument counts against it and the help text is
/// generated from it.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "get", "list").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "config", "keys").
    pub category: String,
}

/// Interface shared by every CLI command.
///
/// Commands receive the loaded settings through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against
    /// [`Command::metadata`].
    ///
    /// # Errors
    ///
    /// Returns `CliError` if an argument cannot be interpreted or the
    /// requested settings entry does not exist.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
