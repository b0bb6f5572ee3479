//! Keybinding inspection commands.
mod list;
mod overview;

use std::sync::Arc;

pub use list::ListCommand;
pub use overview::OverviewCommand;

use crate::cli::{CommandRegistry, Session};

/// Registers the "keys" category: `list` and `overview`.
pub fn register_commands(registry: &mut CommandRegistry, session: Arc<Session>) {
    const CATEGORY_NAME: &str = "keys";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(session.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(OverviewCommand::new(session)));
}
