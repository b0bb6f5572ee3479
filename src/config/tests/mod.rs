//! Unit tests for the settings aggregate
//!
//! Builds settings from in-memory YAML trees. No filesystem dependencies.

#![allow(clippy::panic)]

use serde_yaml::{Mapping, Value};

use crate::{
    HearthError,
    config::{PathContext, Settings, TOP_LEVEL_KEYS, template::Variables},
    test_support::capture_warnings,
};

fn ctx() -> PathContext {
    PathContext::new("/home/foo", "/home/foo/.config/hearth")
}

fn settings(src: &str) -> Settings {
    let raw: Mapping = serde_yaml::from_str(src).unwrap();
    Settings::from_raw(&ctx(), &raw).unwrap()
}

#[test]
fn empty_tree_yields_defaults() {
    let s = settings("{}");
    let defaults = Settings::new(ctx());

    assert_eq!(s, defaults);
    assert_eq!(s.environment.modkey, "mod4");
    assert_eq!(s.groups_layout["default"], "monadtall");
    assert_eq!(s.bar.margin, [8, 8, 0, 8]);
}

#[test]
fn sections_override_defaults_independently() {
    let s = settings(
        r#"
environment:
  modkey: mod1
  wallpaper_dir: $home/wallpapers
monitoring:
  threshold_high: '95'
"#,
    );

    assert_eq!(s.environment.modkey, "mod1");
    assert_eq!(s.environment.browser, "firefox");
    assert_eq!(s.environment.wallpaper_dir, "/home/foo/wallpapers");
    assert_eq!(s.monitoring.threshold_high, 95);
    assert_eq!(s.monitoring.threshold_medium, 75);
}

#[test]
fn serialized_tree_has_every_top_level_key() {
    let json = serde_json::to_value(settings("{}")).unwrap();
    let object = json.as_object().unwrap();

    for key in TOP_LEVEL_KEYS {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert_eq!(object.len(), TOP_LEVEL_KEYS.len());
}

#[test]
fn coercion_failure_propagates() {
    let raw: Mapping = serde_yaml::from_str("monitoring: {threshold_high: lots}").unwrap();

    let err = Settings::from_raw(&ctx(), &raw).unwrap_err();

    assert!(matches!(err, HearthError::InvalidConfigField { ref component, .. } if component == "monitoring"));
}

#[test]
fn inverted_monitoring_thresholds_do_not_fail_settings() {
    let src = "environment: {modkey: mod1}\nmonitoring: {threshold_medium: 95}";

    let (s, warnings) = capture_warnings(|| settings(src));

    assert_eq!(s.environment.modkey, "mod1");
    assert_eq!(s.monitoring.threshold_medium, 95);
    assert_eq!(s.monitoring.threshold_high, 90);
    assert_eq!(warnings, 1);
}

#[test]
fn malformed_keybinding_does_not_fail_settings() {
    let s = settings(
        r#"
keybindings:
  - {name: ok, keys: '$mod Return', action: terminal}
  - 42
"#,
    );

    assert_eq!(s.keybindings.len(), 1);
}

#[test]
fn command_resolves_templates() {
    let s = settings(
        r#"
commands:
  screenshot: $scripts/shot.sh $target
"#,
    );
    let extra = Variables::from([("target".to_string(), "/tmp/a.png".to_string())]);

    assert_eq!(
        s.command("screenshot", &extra).as_deref(),
        Some("/home/foo/.config/hearth/scripts/shot.sh /tmp/a.png")
    );
    assert_eq!(s.command("missing", &extra), None);
}

#[test]
fn dropdown_command_dereferences_named_commands() {
    let s = settings(
        r#"
commands:
  mixer: pavucontrol
scratchpads:
  dropdowns:
    audio: {command: mixer}
    term: {command: kitty --class dropdown}
"#,
    );

    let audio = s.scratchpads.get("audio").unwrap();
    let term = s.scratchpads.get("term").unwrap();

    assert_eq!(s.dropdown_command(audio), "pavucontrol");
    assert_eq!(s.dropdown_command(term), "kitty --class dropdown");
}

#[test]
fn startup_commands_see_session_values() {
    let s = settings(
        r#"
environment:
  wallpaper_timeout: 2
startup:
  wallpaper: wallpaper-rotate $wallpaper_timeout
  locker: xautolock -time $lock_screen_timeout
"#,
    );

    let startup = s.startup_commands();

    assert_eq!(startup[0].name, "wallpaper");
    assert_eq!(startup[0].command, "wallpaper-rotate 120");
    assert_eq!(startup[1].command, "xautolock -time 10");
}

#[test]
fn groups_are_numbered_with_their_layout() {
    let s = settings(
        r#"
groups:
  browsers: ' B '
  win: W
groups_layout:
  default: max
  win: tile
"#,
    );

    let groups = s.group_specs();

    assert_eq!(groups[0].name, "1");
    assert_eq!(groups[0].label, "  B  ");
    assert_eq!(groups[0].layout, "max");
    assert_eq!(groups[1].layout, "tile");
}

#[test]
fn group_layout_falls_back_without_default_entry() {
    let s = settings("groups: {a: A}\ngroups_layout: {b: tile}");

    assert_eq!(s.group_specs()[0].layout, "monadtall");
}

#[test]
fn layouts_merge_defaults_and_skip_unknown() {
    let s = settings(
        r#"
layouts:
  monadtall: {}
  tile: {ratio: 1}
  hexagonal: {}
"#,
    );

    let (layouts, warnings) = capture_warnings(|| s.layout_specs());

    assert_eq!(warnings, 1);
    assert_eq!(layouts.len(), 2);

    let monadtall = &layouts[0];
    assert_eq!(monadtall.args["border_width"], Value::from(4));
    assert_eq!(monadtall.args["margin"], Value::from(8));
    assert_eq!(
        monadtall.args["border_focus"],
        Value::from(s.colors.get("border_color_normal"))
    );

    let tile = &layouts[1];
    assert_eq!(tile.args["border_width"], Value::from(0));
    assert_eq!(tile.args["ratio"], Value::from(1));
    assert_eq!(tile.args["shift_windows"], Value::from(true));
}

#[test]
fn floating_rules_match_class_or_title() {
    let s = settings("floating: {wm_class: [pavucontrol], title: [pinentry]}");

    assert!(s.floating.matches("pavucontrol", ""));
    assert!(s.floating.matches("gcr", "pinentry"));
    assert!(!s.floating.matches("kitty", "zsh"));
}

#[test]
fn unknown_monitoring_color_warns() {
    let raw: Mapping = serde_yaml::from_str("monitoring: {high_color: fg_mauve}").unwrap();

    let (result, warnings) = capture_warnings(|| Settings::from_raw(&ctx(), &raw));

    assert!(result.is_ok());
    assert_eq!(warnings, 1);
}
