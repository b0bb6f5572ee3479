//! Built-in command categories.

pub mod commands;
pub mod config;
pub mod keys;
