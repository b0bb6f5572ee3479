use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Settings,
};

/// Prints the JSON schema of the settings tree.
#[derive(Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Creates the command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schemars::schema_for!(Settings);
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema of the settings".to_string(),
            category: "config".to_string(),
            args: Vec::new(),
            examples: vec!["hearth config schema > hearth.schema.json".to_string()],
        }
    }
}
