//! Settings inspection commands.
mod dump;
mod get;
mod schema;

use std::sync::Arc;

pub use dump::DumpCommand;
pub use get::GetCommand;
pub use schema::SchemaCommand;

use crate::cli::{CommandRegistry, Session};

/// Registers the "config" category: `get`, `dump` and `schema`.
pub fn register_commands(registry: &mut CommandRegistry, session: Arc<Session>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(session.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(DumpCommand::new(session)));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand::new()));
}
