//! Unit tests for keybinding dispatch
//!
//! Settings are built from in-memory YAML; nothing touches the filesystem.

#![allow(clippy::panic)]

use serde_yaml::Mapping;

use crate::{
    config::{PathContext, Settings},
    keys::{
        Action, BindingGroup, BindingLine, BoundKey, HARDWARE_KEYS, KeyCommand, LayoutOp,
        WindowOp, build_group_keys, build_keys, keybinding_overview, render_overview,
    },
};

fn settings(src: &str) -> Settings {
    let raw: Mapping = serde_yaml::from_str(src).unwrap();
    Settings::from_raw(&PathContext::new("/home/foo", "/home/foo/.config/hearth"), &raw).unwrap()
}

fn configured(settings: &Settings) -> Vec<BoundKey> {
    build_keys(settings).split_off(HARDWARE_KEYS.len())
}

#[test]
fn chord_splits_last_token_as_key() {
    let s = settings(
        r#"
environment: {modkey: mod4}
keybindings:
  - {name: term, keys: 'mod4 shift Return', action: terminal}
"#,
    );

    let keys = configured(&s);

    assert_eq!(keys[0].modifiers, ["mod4", "shift"]);
    assert_eq!(keys[0].key, "Return");
    assert_eq!(keys[0].description, "term");
}

#[test]
fn mod_placeholder_uses_modkey() {
    let s = settings(
        r#"
environment: {modkey: mod1}
keybindings:
  - {name: term, keys: '$mod Return', action: terminal}
"#,
    );

    let keys = configured(&s);

    assert_eq!(keys[0].modifiers, ["mod1"]);
    assert_eq!(keys[0].chord(), "mod1+Return");
}

#[test]
fn single_token_has_no_modifiers() {
    let s = settings("keybindings:\n  - {keys: Print, action: spawn, command: flameshot gui}");

    let keys = configured(&s);

    assert!(keys[0].modifiers.is_empty());
    assert_eq!(keys[0].key, "Print");
    assert_eq!(keys[0].command, KeyCommand::Spawn("flameshot gui".to_string()));
}

#[test]
fn empty_chord_binds_nothing() {
    let s = settings("keybindings:\n  - {name: nothing, keys: '', action: shutdown}");

    assert!(configured(&s).is_empty());
}

#[test]
fn unknown_action_is_skipped() {
    let s = settings(
        r#"
keybindings:
  - {name: a, keys: '$mod a', action: teleport}
  - {name: b, keys: '$mod b', action: kill_window}
"#,
    );

    let keys = configured(&s);

    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].command, KeyCommand::Window(WindowOp::Kill));
}

#[test]
fn missing_dropdown_binds_nothing() {
    let s = settings(
        r#"
scratchpads:
  dropdowns:
    term: {command: kitty}
keybindings:
  - {name: absent, keys: '$mod F1', action: dropdown, command: music}
  - {name: present, keys: '$mod F2', action: dropdown, command: term}
"#,
    );

    let keys = configured(&s);

    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].command, KeyCommand::ToggleDropdown("term".to_string()));
}

#[test]
fn spawn_command_dereferences_commands_table() {
    let s = settings(
        r#"
commands:
  launcher: rofi -show drun -theme $rofi_home/launcher.rasi
keybindings:
  - {name: known, keys: '$mod d', action: spawn_command, command: launcher}
  - {name: unknown, keys: '$mod e', action: spawn_command, command: emoji}
"#,
    );

    let keys = configured(&s);

    assert_eq!(keys.len(), 1);
    assert_eq!(
        keys[0].command,
        KeyCommand::Spawn(
            "rofi -show drun -theme /home/foo/.config/hearth/rofi/launcher.rasi".to_string()
        )
    );
}

#[test]
fn programs_and_lock_screen_spawn() {
    let s = settings(
        r#"
environment: {terminal: kitty, browser: qutebrowser}
lock_screen: {command: ~/bin/lock}
keybindings:
  - {keys: '$mod Return', action: terminal}
  - {keys: '$mod b', action: browser}
  - {keys: '$mod l', action: lock_screen}
"#,
    );

    let commands: Vec<KeyCommand> = configured(&s).into_iter().map(|k| k.command).collect();

    assert_eq!(
        commands,
        [
            KeyCommand::Spawn("kitty".to_string()),
            KeyCommand::Spawn("qutebrowser".to_string()),
            KeyCommand::Spawn("/home/foo/bin/lock".to_string()),
        ]
    );
}

#[test]
fn window_manager_actions_map_to_lazy_calls() {
    let s = settings(
        r#"
keybindings:
  - {keys: '$mod h', action: focus_left}
  - {keys: '$mod n', action: reset_windows}
  - {keys: '$mod w', action: second_screen}
  - {keys: '$mod Tab', action: next_layout}
  - {keys: '$mod r', action: cmd}
"#,
    );

    let commands: Vec<KeyCommand> = configured(&s).into_iter().map(|k| k.command).collect();

    assert_eq!(
        commands,
        [
            KeyCommand::Layout(LayoutOp::Left),
            KeyCommand::Layout(LayoutOp::Normalize),
            KeyCommand::ToScreen(1),
            KeyCommand::NextLayout,
            KeyCommand::SpawnPrompt,
        ]
    );
}

#[test]
fn every_action_builds_with_complete_settings() {
    let mut src = String::from(
        "commands: {c: echo c}\nscratchpads: {dropdowns: {d: {command: kitty}}}\nkeybindings:\n",
    );
    for action in Action::ALL {
        let command = match action {
            Action::SpawnCommand => "c",
            Action::Dropdown => "d",
            _ => "echo hi",
        };
        src.push_str(&format!(
            "  - {{keys: '$mod x', action: {action}, command: {command}}}\n"
        ));
    }

    assert_eq!(configured(&settings(&src)).len(), Action::ALL.len());
}

#[test]
fn hardware_keys_come_first_and_always_exist() {
    let s = settings("commands: {volume_up: pamixer -i 5}");

    let keys = build_keys(&s);

    assert_eq!(keys.len(), HARDWARE_KEYS.len());
    assert_eq!(keys[0].key, "XF86AudioRaiseVolume");
    assert_eq!(keys[0].command, KeyCommand::Shell("pamixer -i 5".to_string()));
    assert_eq!(keys[1].command, KeyCommand::Noop);
    assert!(keys.iter().all(|k| k.modifiers.is_empty()));
}

#[test]
fn group_keys_switch_and_move() {
    let s = settings("environment: {modkey: mod4}\ngroups: {web: W, code: C}");

    let keys = build_group_keys(&s);

    assert_eq!(keys.len(), 4);
    assert_eq!(keys[0].chord(), "mod4+1");
    assert_eq!(keys[0].command, KeyCommand::SwitchGroup("1".to_string()));
    assert_eq!(keys[3].chord(), "mod4+shift+2");
    assert_eq!(keys[3].command, KeyCommand::MoveToGroup("2".to_string()));
}

#[test]
fn overview_groups_in_first_seen_order() {
    let s = settings(
        r#"
environment: {modkey: mod4}
keybindings:
  - {name: terminal, keys: '$mod Return', action: terminal, group: apps}
  - {name: close, keys: '$mod q', action: kill_window, group: window}
  - {name: browser, keys: '$mod b', action: browser, group: apps}
"#,
    );

    let overview = keybinding_overview(&s);

    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].group, "apps");
    assert_eq!(overview[0].bindings[1].name, "browser");
    assert_eq!(overview[0].bindings[0].keys, "mod4 + Return");

    let text = render_overview(&overview, str::to_string);
    assert!(text.starts_with("apps\n"));
    assert!(text.contains("  mod4 + q       close\n"));
}

#[test]
fn render_overview_pads_keys_to_the_widest_chord() {
    let groups = vec![
        BindingGroup {
            group: "apps".to_string(),
            bindings: vec![BindingLine {
                keys: "mod4 + Return".to_string(),
                name: "terminal".to_string(),
            }],
        },
        BindingGroup {
            group: "windows".to_string(),
            bindings: vec![BindingLine {
                keys: "mod4 + q".to_string(),
                name: "close".to_string(),
            }],
        },
    ];

    let text = render_overview(&groups, |g| format!("[{g}]"));

    assert_eq!(
        text,
        "[apps]\n  mod4 + Return  terminal\n\n[windows]\n  mod4 + q       close\n\n"
    );
}
