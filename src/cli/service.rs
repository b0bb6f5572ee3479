use std::sync::Arc;

use super::{CliError, CommandRegistry, Session};

/// Entry point for executing CLI commands.
///
/// Owns the registry with every built-in command registered against one
/// loaded [`Session`].
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a service with all built-in commands registered.
    pub fn new(session: Session) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(session));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category,
    /// or the command's own error if it fails.
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

    /// Rendered help for every command.
    pub fn help(&self) -> String {
        self.registry.help_text()
    }
}
