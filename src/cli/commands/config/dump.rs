use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandResult, Session,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Prints the typed settings, with every default filled in, as JSON.
pub struct DumpCommand {
    session: Arc<Session>,
}

impl DumpCommand {
    /// Creates the command over a loaded session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

impl Command for DumpCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let tree = serde_json::to_value(&self.session.settings)?;

        let selected = match args.first() {
            None => &tree,
            Some(section) => tree.get(section.as_str()).ok_or_else(|| {
                CliError::ConfigError(format!("Unknown settings section '{section}'"))
            })?,
        };

        Ok(serde_json::to_string_pretty(selected)?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "dump".to_string(),
            description: "Print the effective settings as JSON".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "section".to_string(),
                description: "Top-level section to print (e.g., monitoring)".to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "hearth config dump".to_string(),
                "hearth config dump lock_screen".to_string(),
            ],
        }
    }
}
