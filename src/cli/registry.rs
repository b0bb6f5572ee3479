use std::{collections::HashMap, sync::Arc};

use super::{
    CliError, Command, Session,
    commands::{commands, config, keys},
    formatting::{format_category, format_command, format_description, format_header},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// ```text
/// registry
/// ├── config
/// │   ├── get
/// │   ├── dump
/// │   └── schema
/// ├── keys
/// │   ├── list
/// │   └── overview
/// └── commands
///     ├── list
///     └── resolve
/// ```
pub struct CommandRegistry {
    /// Category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    session: Arc<Session>,
}

impl CommandRegistry {
    /// Creates an empty registry whose commands will read `session`.
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            categories: HashMap::new(),
            session,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key; registering the same name
    /// twice replaces the earlier command.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or command does
    /// not exist, `CliError::InvalidArguments` if the argument count does
    /// not match the command's metadata, and whatever the command returns.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Help text listing every command with its arguments and description.
    pub fn help_text(&self) -> String {
        let mut out = format!("{}\n", format_header("hearth <category> <command> [args]"));

        for (category, names) in self.list_commands() {
            out.push('\n');
            out.push_str(&format_category(&category));
            out.push('\n');

            let Some(commands) = self.categories.get(&category) else {
                continue;
            };

            for name in names {
                let Some(command) = commands.get(&name) else {
                    continue;
                };
                let metadata = command.metadata();
                let args: Vec<String> = metadata
                    .args
                    .iter()
                    .map(|arg| {
                        if arg.required {
                            format!("<{}>", arg.name)
                        } else {
                            format!("[{}]", arg.name)
                        }
                    })
                    .collect();

                out.push_str(&format!(
                    "  {} {}  {}\n",
                    format_command(&metadata.name),
                    args.join(" "),
                    format_description(&metadata.description)
                ));
            }
        }

        out
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers every built-in command.
    pub fn register_all_commands(&mut self) {
        let session = self.session.clone();

        config::register_commands(self, session.clone());
        keys::register_commands(self, session.clone());
        commands::register_commands(self, session);
    }
}
