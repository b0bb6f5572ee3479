use std::fmt;

use serde::Serialize;

/// Operation on the current layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutOp {
    /// Focus the window to the left.
    Left,
    /// Focus the window to the right.
    Right,
    /// Focus the window below.
    Down,
    /// Focus the window above.
    Up,
    /// Focus the next window.
    Next,
    /// Swap with the window to the left.
    ShuffleLeft,
    /// Swap with the window to the right.
    ShuffleRight,
    /// Swap with the window below.
    ShuffleDown,
    /// Swap with the window above.
    ShuffleUp,
    /// Grow leftwards.
    GrowLeft,
    /// Grow rightwards.
    GrowRight,
    /// Grow downwards.
    GrowDown,
    /// Grow upwards.
    GrowUp,
    /// Reset every window to its default size.
    Normalize,
}

/// Operation on the focused window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowOp {
    /// Close it.
    Kill,
    /// Toggle fullscreen.
    ToggleFullscreen,
    /// Toggle floating.
    ToggleFloating,
}

/// What the window manager does when a bound key is pressed.
///
/// Commands are only described here; running them is the window manager's
/// job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "arg", rename_all = "snake_case")]
pub enum KeyCommand {
    /// Spawn a program with a resolved command line.
    Spawn(String),
    /// Run a resolved command line through the shell.
    Shell(String),
    /// Do nothing; the key stays bound.
    Noop,
    /// Open the run prompt.
    SpawnPrompt,
    /// Toggle the named dropdown of the scratchpad group.
    ToggleDropdown(String),
    /// Layout operation.
    Layout(LayoutOp),
    /// Focused window operation.
    Window(WindowOp),
    /// Focus the screen at this 0-based index.
    ToScreen(usize),
    /// Focus the next screen.
    NextScreen,
    /// Focus the previous screen.
    PreviousScreen,
    /// Cycle layouts.
    NextLayout,
    /// Reload the window manager configuration.
    ReloadConfig,
    /// Quit the window manager.
    Shutdown,
    /// Switch back to the previous group.
    ToggleGroup,
    /// Show the named group on the first screen.
    SwitchGroup(String),
    /// Move the focused window to the named group without following it.
    MoveToGroup(String),
}

impl fmt::Display for KeyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCommand::Spawn(cmd) => write!(f, "spawn {cmd}"),
            KeyCommand::Shell(cmd) => write!(f, "shell {cmd}"),
            KeyCommand::Noop => f.write_str("noop"),
            KeyCommand::SpawnPrompt => f.write_str("prompt"),
            KeyCommand::ToggleDropdown(name) => write!(f, "dropdown {name}"),
            KeyCommand::Layout(op) => write!(f, "layout {op:?}"),
            KeyCommand::Window(op) => write!(f, "window {op:?}"),
            KeyCommand::ToScreen(i) => write!(f, "screen {i}"),
            KeyCommand::NextScreen => f.write_str("next screen"),
            KeyCommand::PreviousScreen => f.write_str("previous screen"),
            KeyCommand::NextLayout => f.write_str("next layout"),
            KeyCommand::ReloadConfig => f.write_str("reload config"),
            KeyCommand::Shutdown => f.write_str("shutdown"),
            KeyCommand::ToggleGroup => f.write_str("toggle group"),
            KeyCommand::SwitchGroup(name) => write!(f, "group {name}"),
            KeyCommand::MoveToGroup(name) => write!(f, "move to group {name}"),
        }
    }
}
