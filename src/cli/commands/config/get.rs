use std::sync::Arc;

use serde_yaml::Value;

use crate::cli::{
    CliError, Command, CommandResult, Session,
    formatting::format_yaml_value,
    path_ops::navigate_path,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Reads one value from the merged source documents.
///
/// # Example Usage
///
/// ```bash
/// hearth config get environment.modkey
/// hearth config get bar.widgets.0
/// ```
pub struct GetCommand {
    session: Arc<Session>,
}

impl GetCommand {
    /// Creates the command over a loaded session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

impl Command for GetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'get' command".to_string())
        })?;

        let root = Value::Mapping(self.session.raw.clone());
        let value = navigate_path(&root, path)?;

        Ok(format!("{}: {}", path, format_yaml_value(value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get a value from the merged source documents".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: "Dotted path (e.g., environment.modkey)".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec![
                "hearth config get environment.modkey".to_string(),
                "hearth config get colors.fg_normal".to_string(),
                "hearth config get bar.widgets.0".to_string(),
            ],
        }
    }
}
