use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult, Session,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    keys::{BoundKey, build_group_keys, build_keys},
};

/// Lists every bound key: hardware keys, configured bindings and, on
/// request, the group keys.
///
/// # Example Usage
///
/// ```bash
/// hearth keys list
/// hearth keys list json
/// ```
pub struct ListCommand {
    session: Arc<Session>,
}

impl ListCommand {
    /// Creates the command over a loaded session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    fn bound_keys(&self, include_groups: bool) -> Vec<BoundKey> {
        let settings = &self.session.settings;
        let mut keys = build_keys(settings);
        if include_groups {
            keys.extend(build_group_keys(settings));
        }
        keys
    }
}

impl Command for ListCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        match args.first().map(String::as_str) {
            None | Some("text") => {
                let keys = self.bound_keys(false);
                let width = keys.iter().map(|k| k.chord().len()).max().unwrap_or(0);

                Ok(keys
                    .iter()
                    .map(|k| format!("{:<width$}  {}", k.chord(), k.command))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Some("all") => Ok(self
                .bound_keys(true)
                .iter()
                .map(|k| format!("{}  {}", k.chord(), k.command))
                .collect::<Vec<_>>()
                .join("\n")),
            Some("json") => Ok(serde_json::to_string_pretty(&self.bound_keys(true))?),
            Some(other) => Err(CliError::InvalidArguments(format!(
                "Unknown format '{other}', expected text, all or json"
            ))),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List bound keys and their commands".to_string(),
            category: "keys".to_string(),
            args: vec![CommandArg {
                name: "format".to_string(),
                description: "text (default), all (with group keys) or json".to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "hearth keys list".to_string(),
                "hearth keys list json".to_string(),
            ],
        }
    }
}
