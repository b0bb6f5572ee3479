//! Layered desktop configuration.
//!
//! Source documents (colors, applications, keybindings and the main config)
//! are merged into one raw YAML tree, which is then turned into the typed
//! [`Settings`] aggregate. Every section falls back to its defaults, so an
//! empty configuration directory still produces usable settings.

mod applications;
mod bar;
mod colors;
mod environment;
mod fonts;
mod keybindings;
mod lock_screen;
mod monitoring;
mod paths;
mod raw;
mod scratchpads;
mod settings;
pub mod theme;

/// Source discovery, reading and merging.
pub mod loading;
pub mod template;

#[cfg(test)]
mod tests;

pub use applications::Applications;
pub use bar::{Bar, BarPosition, WidgetSpec};
pub use colors::{Colors, DEFAULT_PALETTE};
pub use environment::{Environment, guess_terminal};
pub use fonts::Fonts;
pub use keybindings::{DEFAULT_GROUP, KeyBinding, build_keybindings};
pub use lock_screen::{LockScreen, expand_tilde};
pub use monitoring::{Monitoring, Severity};
pub use paths::{ConfigPaths, PathContext};
pub use raw::{RawSection, scalar_to_string};
pub use scratchpads::{DropdownSpec, Scratchpads};
pub use settings::{
    Floating, GroupSpec, KNOWN_LAYOUTS, LayoutSpec, Settings, StartupCommand, TOP_LEVEL_KEYS,
};
pub use theme::{apply_theme, preload_colors};
