//! Unit tests for CLI module
//!
//! Tests the command registry, formatting and path navigation against
//! sessions built from in-memory YAML.

#![allow(clippy::panic)]

use std::sync::Arc;

use serde_yaml::{Mapping, Value};

use crate::{
    cli::{
        CliError, CliService, CommandRegistry, ResolveCommand, Session,
        formatting::format_yaml_value, path_ops::navigate_path,
    },
    config::PathContext,
};

const SOURCE: &str = r#"
environment: {modkey: mod4, terminal: kitty}
commands:
  screenshot: maim $target
  volume_up: pamixer -i $level
bar:
  widgets:
    - {name: clock}
    - {name: cpu}
keybindings:
  - {name: term, keys: '$mod Return', action: terminal, group: apps}
"#;

fn session() -> Session {
    let raw: Mapping = serde_yaml::from_str(SOURCE).unwrap();
    Session::from_raw(&PathContext::new("/home/foo", "/home/foo/.config/hearth"), raw).unwrap()
}

fn service() -> CliService {
    CliService::new(session())
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn format_yaml_value_scalars() {
    assert_eq!(format_yaml_value(&Value::from("hello world")), "\"hello world\"");
    assert_eq!(format_yaml_value(&Value::from("")), "\"\"");
    assert_eq!(format_yaml_value(&Value::from(-123)), "-123");
    assert_eq!(format_yaml_value(&Value::from(2.5)), "2.5");
    assert_eq!(format_yaml_value(&Value::from(true)), "true");
    assert_eq!(format_yaml_value(&Value::Null), "null");
}

#[test]
fn format_yaml_value_collections_show_size() {
    let seq: Value = serde_yaml::from_str("[1, 2, 3]").unwrap();
    assert_eq!(format_yaml_value(&seq), "[3]");

    let map: Value = serde_yaml::from_str("{a: 1, b: {c: 2}}").unwrap();
    assert_eq!(format_yaml_value(&map), "{2}");

    assert_eq!(format_yaml_value(&Value::Mapping(Mapping::new())), "{0}");
}

#[test]
fn navigate_path_follows_mappings_and_indices() {
    let root: Value = serde_yaml::from_str(SOURCE).unwrap();

    let modkey = navigate_path(&root, "environment.modkey").unwrap();
    assert_eq!(modkey.as_str(), Some("mod4"));

    let widget = navigate_path(&root, "bar.widgets.1.name").unwrap();
    assert_eq!(widget.as_str(), Some("cpu"));

    assert_eq!(navigate_path(&root, "").unwrap(), &root);
}

#[test]
fn navigate_path_reports_missing_segments() {
    let root: Value = serde_yaml::from_str(SOURCE).unwrap();

    let Err(CliError::ConfigError(message)) = navigate_path(&root, "environment.shell") else {
        panic!("expected a missing key error");
    };
    assert!(message.contains("'shell'"));
    assert!(message.contains("'environment'"));

    assert!(matches!(
        navigate_path(&root, "bar.widgets.9"),
        Err(CliError::ConfigError(_))
    ));
    assert!(matches!(
        navigate_path(&root, "bar.widgets.first"),
        Err(CliError::ConfigError(_))
    ));
    assert!(matches!(
        navigate_path(&root, "environment.modkey.x"),
        Err(CliError::ConfigError(_))
    ));
}

#[test]
fn empty_registry_has_no_categories() {
    let registry = CommandRegistry::new(Arc::new(session()));

    assert!(registry.list_commands().is_empty());
    assert!(matches!(
        registry.execute("config", "get", &[]),
        Err(CliError::CommandNotFound(_))
    ));
}

#[test]
fn registered_categories_are_sorted() {
    let listed = service().list_all();
    let categories: Vec<&str> = listed.iter().map(|(c, _)| c.as_str()).collect();

    assert_eq!(categories, ["commands", "config", "keys"]);
    assert_eq!(listed[1].1, ["dump", "get", "schema"]);
}

#[test]
fn unknown_command_is_not_found() {
    let cli = service();

    assert!(matches!(
        cli.execute_command("audio", "volume", &[]),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        cli.execute_command("config", "set", &[]),
        Err(CliError::CommandNotFound(_))
    ));
}

#[test]
fn argument_count_is_validated() {
    let cli = service();

    assert!(matches!(
        cli.execute_command("config", "get", &[]),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        cli.execute_command("keys", "overview", &args(&["extra"])),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn config_get_prints_path_and_value() {
    let out = service()
        .execute_command("config", "get", &args(&["environment.modkey"]))
        .unwrap();

    assert_eq!(out, "environment.modkey: \"mod4\"");
}

#[test]
fn config_dump_section_is_json() {
    let out = service()
        .execute_command("config", "dump", &args(&["environment"]))
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["modkey"], "mod4");
    assert_eq!(json["terminal"], "kitty");
}

#[test]
fn keys_list_includes_configured_binding() {
    let out = service().execute_command("keys", "list", &[]).unwrap();

    assert!(out.lines().any(|l| l.starts_with("mod4+Return") && l.ends_with("kitty")));
}

#[test]
fn keys_list_rejects_unknown_format() {
    assert!(matches!(
        service().execute_command("keys", "list", &args(&["yaml"])),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn commands_resolve_substitutes_values() {
    let cli = service();

    let out = cli
        .execute_command("commands", "resolve", &args(&["volume_up", "level=5"]))
        .unwrap();
    assert_eq!(out, "pamixer -i 5");

    let out = cli
        .execute_command("commands", "resolve", &args(&["screenshot"]))
        .unwrap();
    assert_eq!(out, "maim $target");
}

#[test]
fn commands_resolve_errors() {
    let cli = service();

    assert!(matches!(
        cli.execute_command("commands", "resolve", &args(&["unknown"])),
        Err(CliError::ConfigError(_))
    ));
    assert!(matches!(
        cli.execute_command("commands", "resolve", &args(&["volume_up", "level"])),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        cli.execute_command("commands", "resolve", &args(&["volume_up", "=5"])),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn resolve_metadata_marks_values_optional() {
    let metadata = crate::cli::Command::metadata(&ResolveCommand::new(Arc::new(session())));

    assert_eq!(metadata.category, "commands");
    assert!(metadata.args[0].required);
    assert!(!metadata.args[1].required);
}

#[test]
fn help_lists_every_category() {
    let help = service().help();

    for category in ["commands", "config", "keys"] {
        assert!(help.contains(category));
    }
    assert!(help.contains("<path>"));
    assert!(help.contains("[values]"));
}
