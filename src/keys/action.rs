use std::{fmt, str::FromStr};

/// Every action a declarative keybinding may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Open the configured browser.
    Browser,
    /// Open the run prompt.
    Cmd,
    /// Toggle a scratchpad dropdown named by the binding's command.
    Dropdown,
    /// Focus the first screen.
    FirstScreen,
    /// Toggle floating for the focused window.
    Floating,
    /// Move focus down.
    FocusDown,
    /// Move focus left.
    FocusLeft,
    /// Focus the next window.
    FocusNext,
    /// Move focus right.
    FocusRight,
    /// Move focus up.
    FocusUp,
    /// Toggle fullscreen for the focused window.
    Fullscreen,
    /// Grow the focused window downwards.
    GrowDown,
    /// Grow the focused window leftwards.
    GrowLeft,
    /// Grow the focused window rightwards.
    GrowRight,
    /// Grow the focused window upwards.
    GrowUp,
    /// Close the focused window.
    KillWindow,
    /// Run the lock screen command.
    LockScreen,
    /// Cycle to the next layout.
    NextLayout,
    /// Focus the next screen.
    NextScreen,
    /// Focus the previous screen.
    PreviousScreen,
    /// Reload the window manager configuration.
    ReloadConfig,
    /// Restore window sizes.
    ResetWindows,
    /// Focus the second screen.
    SecondScreen,
    /// Move the focused window down.
    ShuffleDown,
    /// Move the focused window left.
    ShuffleLeft,
    /// Move the focused window right.
    ShuffleRight,
    /// Move the focused window up.
    ShuffleUp,
    /// Quit the window manager.
    Shutdown,
    /// Spawn a command from the `commands` table.
    SpawnCommand,
    /// Spawn the binding's own command template.
    Spawn,
    /// Open the configured terminal.
    Terminal,
    /// Switch back to the previously focused group.
    ToggleGroup,
}

impl Action {
    /// All actions in identifier order.
    pub const ALL: [Action; 32] = [
        Action::Browser,
        Action::Cmd,
        Action::Dropdown,
        Action::FirstScreen,
        Action::Floating,
        Action::FocusDown,
        Action::FocusLeft,
        Action::FocusNext,
        Action::FocusRight,
        Action::FocusUp,
        Action::Fullscreen,
        Action::GrowDown,
        Action::GrowLeft,
        Action::GrowRight,
        Action::GrowUp,
        Action::KillWindow,
        Action::LockScreen,
        Action::NextLayout,
        Action::NextScreen,
        Action::PreviousScreen,
        Action::ReloadConfig,
        Action::ResetWindows,
        Action::SecondScreen,
        Action::ShuffleDown,
        Action::ShuffleLeft,
        Action::ShuffleRight,
        Action::ShuffleUp,
        Action::Shutdown,
        Action::SpawnCommand,
        Action::Spawn,
        Action::Terminal,
        Action::ToggleGroup,
    ];

    /// Identifier used in keybinding documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Browser => "browser",
            Action::Cmd => "cmd",
            Action::Dropdown => "dropdown",
            Action::FirstScreen => "first_screen",
            Action::Floating => "floating",
            Action::FocusDown => "focus_down",
            Action::FocusLeft => "focus_left",
            Action::FocusNext => "focus_next",
            Action::FocusRight => "focus_right",
            Action::FocusUp => "focus_up",
            Action::Fullscreen => "fullscreen",
            Action::GrowDown => "grow_down",
            Action::GrowLeft => "grow_left",
            Action::GrowRight => "grow_right",
            Action::GrowUp => "grow_up",
            Action::KillWindow => "kill_window",
            Action::LockScreen => "lock_screen",
            Action::NextLayout => "next_layout",
            Action::NextScreen => "next_screen",
            Action::PreviousScreen => "previous_screen",
            Action::ReloadConfig => "reload_config",
            Action::ResetWindows => "reset_windows",
            Action::SecondScreen => "second_screen",
            Action::ShuffleDown => "shuffle_down",
            Action::ShuffleLeft => "shuffle_left",
            Action::ShuffleRight => "shuffle_right",
            Action::ShuffleUp => "shuffle_up",
            Action::Shutdown => "shutdown",
            Action::SpawnCommand => "spawn_command",
            Action::Spawn => "spawn",
            Action::Terminal => "terminal",
            Action::ToggleGroup => "toggle_group",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier that names no action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action '{}'", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn identifiers_are_exact() {
        assert!("Spawn".parse::<Action>().is_err());
        assert!(" spawn".parse::<Action>().is_err());
        assert_eq!(
            "teleport".parse::<Action>().unwrap_err().to_string(),
            "unknown action 'teleport'"
        );
    }
}
