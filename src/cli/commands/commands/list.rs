use std::sync::Arc;

use crate::cli::{Command, CommandResult, Session, types::CommandMetadata};

/// Lists the configured command names with their raw templates.
pub struct ListCommand {
    session: Arc<Session>,
}

impl ListCommand {
    /// Creates the command over a loaded session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

impl Command for ListCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let commands = &self.session.settings.commands;
        let width = commands.keys().map(String::len).max().unwrap_or(0);

        Ok(commands
            .iter()
            .map(|(name, template)| format!("{name:<width$}  {template}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List named command templates".to_string(),
            category: "commands".to_string(),
            args: Vec::new(),
            examples: vec!["hearth commands list".to_string()],
        }
    }
}
