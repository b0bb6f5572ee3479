use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult, Session,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::template::Variables,
};

/// Resolves a named command template to the command line that would run.
///
/// # Example Usage
///
/// ```bash
/// hearth commands resolve screenshot
/// hearth commands resolve screenshot target=/tmp/shot.png,delay=2
/// ```
pub struct ResolveCommand {
    session: Arc<Session>,
}

impl ResolveCommand {
    /// Creates the command over a loaded session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let name = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <name> argument for 'resolve'".to_string())
        })?;

        let values = match args.get(1) {
            Some(assignments) => parse_assignments(assignments)?,
            None => Variables::new(),
        };

        self.session
            .settings
            .command(name, &values)
            .ok_or_else(|| CliError::ConfigError(format!("No command named '{name}'")))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "resolve".to_string(),
            description: "Resolve a named command template".to_string(),
            category: "commands".to_string(),
            args: vec![
                CommandArg {
                    name: "name".to_string(),
                    description: "Key in the commands table".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "values".to_string(),
                    description: "Extra variables, e.g. level=5,target=out.png".to_string(),
                    required: false,
                    value_type: ArgType::Assignments,
                },
            ],
            examples: vec![
                "hearth commands resolve volume_up".to_string(),
                "hearth commands resolve screenshot target=/tmp/shot.png".to_string(),
            ],
        }
    }
}

/// Parses `key=value` pairs separated by commas.
///
/// # Errors
///
/// Returns `CliError::InvalidArguments` for a pair without `=` or with an
/// empty key.
pub(crate) fn parse_assignments(text: &str) -> Result<Variables, CliError> {
    text.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                CliError::InvalidArguments(format!("Expected key=value, got '{pair}'"))
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::InvalidArguments(format!(
                    "Missing variable name in '{pair}'"
                )));
            }

            Ok((key.to_string(), value.trim().to_string()))
        })
        .collect()
}
