//! Named shell command inspection.
mod list;
mod resolve;

use std::sync::Arc;

pub use list::ListCommand;
pub use resolve::ResolveCommand;

use crate::cli::{CommandRegistry, Session};

/// Registers the "commands" category: `list` and `resolve`.
pub fn register_commands(registry: &mut CommandRegistry, session: Arc<Session>) {
    const CATEGORY_NAME: &str = "commands";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(session.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ResolveCommand::new(session)));
}
