use std::sync::Arc;

use crate::{
    cli::{Command, CommandResult, Session, formatting::format_subheader, types::CommandMetadata},
    keys::{keybinding_overview, render_overview},
};

/// Shows the configured bindings grouped for reading.
pub struct OverviewCommand {
    session: Arc<Session>,
}

impl OverviewCommand {
    /// Creates the command over a loaded session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

impl Command for OverviewCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let groups = keybinding_overview(&self.session.settings);
        if groups.is_empty() {
            return Ok("No keybindings configured".to_string());
        }

        let text = render_overview(&groups, format_subheader);
        Ok(text.trim_end().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "overview".to_string(),
            description: "Show keybindings grouped by category".to_string(),
            category: "keys".to_string(),
            args: Vec::new(),
            examples: vec!["hearth keys overview".to_string()],
        }
    }
}
