//! Hearth - layered desktop configuration and keybinding dispatch.
//!
//! Hearth reads a set of optional YAML documents, merges them into a typed
//! settings tree, resolves `$variable` path and command templates, and turns
//! declarative keybindings into concrete key commands for a window manager.
//! The main features include:
//!
//! - Layered sources with `_default` fallbacks and a fixed precedence order
//! - Typed settings sections with per-field defaults
//! - Theme overlays for the color palette
//! - A closed action table for keybindings
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hearth::{config::{PathContext, Settings}, keys::build_keys};
//!
//! let ctx = PathContext::from_env()?;
//! let settings = Settings::load(&ctx)?;
//!
//! for key in build_keys(&settings) {
//!     println!("{} -> {}", key.chord(), key.command);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Layered configuration loading and the typed settings tree.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Keybinding action table and key builders.
pub mod keys;

/// Command-line interface for inspecting the settings.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{HearthError, Result};
