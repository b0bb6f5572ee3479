//! Command-line interface for inspecting the loaded settings.
//!
//! Commands are organized by category and generate their help text from
//! metadata. Every command reads one [`Session`] loaded at startup.

mod commands;
pub mod formatting;
pub mod path_ops;
mod registry;
mod service;
mod session;
mod types;

#[cfg(test)]
mod tests;

pub use commands::{
    commands::{ListCommand as ListCommandsCommand, ResolveCommand},
    config::{DumpCommand, GetCommand, SchemaCommand},
    keys::{ListCommand as ListKeysCommand, OverviewCommand},
};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use session::Session;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
