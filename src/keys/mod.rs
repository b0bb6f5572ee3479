//! Turns declarative keybindings into bound key commands.
//!
//! [`build_keys`] starts from the hardware media keys, then walks the
//! configured bindings in order. A binding whose action is unknown, or
//! whose action cannot be built from the current settings (a missing
//! command or dropdown), is dropped without failing the rest.

mod action;
mod command;
mod overview;

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::debug;

pub use action::{Action, UnknownAction};
pub use command::{KeyCommand, LayoutOp, WindowOp};
pub use overview::{BindingGroup, BindingLine, keybinding_overview, render_overview};

use crate::config::{KeyBinding, Settings, template::{Variables, build_shell_command}};

/// Media keys bound regardless of configuration: key name, command name
/// and description.
pub const HARDWARE_KEYS: [(&str, &str, &str); 9] = [
    ("XF86AudioRaiseVolume", "volume_up", "Up the volume"),
    ("XF86AudioLowerVolume", "volume_down", "Down the volume"),
    ("XF86AudioMute", "mute", "Toggle mute"),
    ("XF86AudioMicMute", "mic_mute", "Toggle microphone mute"),
    ("XF86AudioPlay", "play_pause", "Play or pause the player"),
    ("XF86AudioNext", "next_song", "Next song"),
    ("XF86AudioPrev", "previous_song", "Previous song"),
    ("XF86MonBrightnessUp", "backlight_up", "Brightness up"),
    ("XF86MonBrightnessDown", "backlight_down", "Brightness down"),
];

/// A key chord bound to a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundKey {
    /// Modifier names, e.g. `["mod4", "shift"]`.
    pub modifiers: Vec<String>,
    /// Key name, e.g. `Return`.
    pub key: String,
    /// Command run on press.
    pub command: KeyCommand,
    /// Human readable description.
    pub description: String,
}

impl BoundKey {
    /// Splits a chord into modifiers and key: the last token is the key.
    ///
    /// Returns `None` for an empty chord.
    pub fn from_chord(
        chord: Vec<String>,
        command: KeyCommand,
        description: impl Into<String>,
    ) -> Option<Self> {
        let mut modifiers = chord;
        let key = modifiers.pop()?;

        Some(Self {
            modifiers,
            key,
            command,
            description: description.into(),
        })
    }

    /// The chord joined with `+`, e.g. `mod4+shift+Return`.
    pub fn chord(&self) -> String {
        self.modifiers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.key.as_str()))
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// Builds the full runtime key list: hardware keys, then configured bindings.
pub fn build_keys(settings: &Settings) -> Vec<BoundKey> {
    let mut keys = hardware_keys(settings);

    for binding in &settings.keybindings {
        let action = match binding.action.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                debug!(binding = %binding.name, "skipping keybinding: {e}");
                continue;
            }
        };

        match build_key(settings, binding, action) {
            Some(key) => keys.push(key),
            None => debug!(
                binding = %binding.name,
                action = %action,
                "keybinding has nothing to bind"
            ),
        }
    }

    keys
}

/// Builds one binding, or `None` when its action has nothing to run.
pub fn build_key(settings: &Settings, binding: &KeyBinding, action: Action) -> Option<BoundKey> {
    let command = key_command(settings, binding, action)?;
    let chord = binding.chord(&settings.environment.modkey);

    BoundKey::from_chord(chord, command, binding.name.clone())
}

/// Keys that switch to each group and move the focused window there.
///
/// Group `n` (numbered from 1) is shown with `[mod] n` and receives the
/// focused window with `[mod, shift] n`.
pub fn build_group_keys(settings: &Settings) -> Vec<BoundKey> {
    let modkey = &settings.environment.modkey;

    settings
        .group_specs()
        .into_iter()
        .flat_map(|group| {
            [
                BoundKey {
                    modifiers: vec![modkey.clone()],
                    key: group.name.clone(),
                    command: KeyCommand::SwitchGroup(group.name.clone()),
                    description: format!("Switch to group {}", group.name),
                },
                BoundKey {
                    modifiers: vec![modkey.clone(), "shift".to_string()],
                    key: group.name.clone(),
                    command: KeyCommand::MoveToGroup(group.name.clone()),
                    description: format!("Move focused window to group {}", group.name),
                },
            ]
        })
        .collect()
}

fn hardware_keys(settings: &Settings) -> Vec<BoundKey> {
    HARDWARE_KEYS
        .iter()
        .map(|(key, command_name, description)| BoundKey {
            modifiers: Vec::new(),
            key: key.to_string(),
            command: settings
                .command(command_name, &Variables::new())
                .map_or(KeyCommand::Noop, KeyCommand::Shell),
            description: description.to_string(),
        })
        .collect()
}

fn key_command(settings: &Settings, binding: &KeyBinding, action: Action) -> Option<KeyCommand> {
    let command = match action {
        Action::Spawn => KeyCommand::Spawn(build_shell_command(
            settings.paths(),
            binding.command.as_deref()?,
            &Variables::new(),
        )),
        Action::SpawnCommand => {
            KeyCommand::Spawn(settings.command(binding.command.as_deref()?, &Variables::new())?)
        }
        Action::Terminal => spawn(settings, &settings.environment.terminal),
        Action::Browser => spawn(settings, &settings.environment.browser),
        Action::LockScreen => {
            KeyCommand::Spawn(settings.lock_screen.expanded_command(settings.paths()))
        }
        Action::Cmd => KeyCommand::SpawnPrompt,
        Action::Dropdown => {
            let dropdown = settings.scratchpads.get(binding.command.as_deref()?)?;
            KeyCommand::ToggleDropdown(dropdown.name.clone())
        }
        Action::FocusLeft => KeyCommand::Layout(LayoutOp::Left),
        Action::FocusRight => KeyCommand::Layout(LayoutOp::Right),
        Action::FocusDown => KeyCommand::Layout(LayoutOp::Down),
        Action::FocusUp => KeyCommand::Layout(LayoutOp::Up),
        Action::FocusNext => KeyCommand::Layout(LayoutOp::Next),
        Action::ShuffleLeft => KeyCommand::Layout(LayoutOp::ShuffleLeft),
        Action::ShuffleRight => KeyCommand::Layout(LayoutOp::ShuffleRight),
        Action::ShuffleDown => KeyCommand::Layout(LayoutOp::ShuffleDown),
        Action::ShuffleUp => KeyCommand::Layout(LayoutOp::ShuffleUp),
        Action::GrowLeft => KeyCommand::Layout(LayoutOp::GrowLeft),
        Action::GrowRight => KeyCommand::Layout(LayoutOp::GrowRight),
        Action::GrowDown => KeyCommand::Layout(LayoutOp::GrowDown),
        Action::GrowUp => KeyCommand::Layout(LayoutOp::GrowUp),
        Action::ResetWindows => KeyCommand::Layout(LayoutOp::Normalize),
        Action::KillWindow => KeyCommand::Window(WindowOp::Kill),
        Action::Fullscreen => KeyCommand::Window(WindowOp::ToggleFullscreen),
        Action::Floating => KeyCommand::Window(WindowOp::ToggleFloating),
        Action::FirstScreen => KeyCommand::ToScreen(0),
        Action::SecondScreen => KeyCommand::ToScreen(1),
        Action::NextScreen => KeyCommand::NextScreen,
        Action::PreviousScreen => KeyCommand::PreviousScreen,
        Action::NextLayout => KeyCommand::NextLayout,
        Action::ReloadConfig => KeyCommand::ReloadConfig,
        Action::Shutdown => KeyCommand::Shutdown,
        Action::ToggleGroup => KeyCommand::ToggleGroup,
    };

    Some(command)
}

fn spawn(settings: &Settings, program: &str) -> KeyCommand {
    KeyCommand::Spawn(build_shell_command(
        settings.paths(),
        program,
        &Variables::new(),
    ))
}
