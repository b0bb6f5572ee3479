//! Integration tests for loading layered sources from disk.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{
    fs,
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use hearth::{
    HearthError,
    config::{PathContext, Settings, apply_theme, loading::SourceFiles},
    keys::{HARDWARE_KEYS, KeyCommand, build_keys},
};
use tempfile::TempDir;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{Layer, Registry, layer::Context, layer::SubscriberExt};

struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_warnings<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = Registry::default().with(WarnCounter(count.clone()));
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, count.load(Ordering::SeqCst))
}

fn setup() -> (TempDir, PathContext) {
    let dir = TempDir::new().unwrap();
    let ctx = PathContext::new(dir.path(), dir.path().join("hearth"));
    fs::create_dir_all(ctx.config_home()).unwrap();
    (dir, ctx)
}

fn write(dir: &Path, name: &str, content: &str) {
    if let Some(parent) = dir.join(name).parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn loads_layers_into_settings_and_keys() {
    let (_dir, ctx) = setup();
    write(ctx.config_home(), "colors.yml", "colors:\n  fg: '#111'\n");
    write(ctx.config_home(), "config.yml", "environment:\n  modkey: mod1\n");
    write(
        ctx.config_home(),
        "keybindings.yml",
        "keybindings:\n  - {name: term, keys: '$mod Return', action: terminal}\n",
    );

    let settings = Settings::load(&ctx).unwrap();

    assert_eq!(settings.colors.raw()["fg"], "#111");
    assert_eq!(settings.environment.modkey, "mod1");

    let keys = build_keys(&settings);
    let term = &keys[HARDWARE_KEYS.len()];
    assert_eq!(term.modifiers, ["mod1"]);
    assert_eq!(term.key, "Return");
    assert_eq!(
        term.command,
        KeyCommand::Spawn(settings.environment.terminal.clone())
    );
}

#[test]
fn main_config_overrides_other_layers() {
    let (_dir, ctx) = setup();
    write(
        ctx.config_home(),
        "colors.yml",
        "colors:\n  fg: '#111'\n  bg: '#000'\n",
    );
    write(ctx.config_home(), "config.yml", "colors:\n  fg: '#fff'\n");

    let settings = Settings::load(&ctx).unwrap();

    assert_eq!(settings.colors.get("fg"), "#fff");
    assert_eq!(settings.colors.get("bg"), "#000");
}

#[test]
fn explicit_config_path_wins_over_discovery() {
    let (dir, ctx) = setup();
    write(ctx.config_home(), "config.yml", "environment: {modkey: mod1}\n");
    write(dir.path(), "other.yml", "environment: {modkey: mod3}\n");

    let files = SourceFiles {
        config: Some(dir.path().join("other.yml")),
        ..SourceFiles::default()
    };
    let settings = Settings::load_from(&ctx, files).unwrap();

    assert_eq!(settings.environment.modkey, "mod3");
}

#[test]
fn default_file_is_used_with_one_warning() {
    let (_dir, ctx) = setup();
    write(
        ctx.config_home(),
        "config_default.yml",
        "environment: {modkey: mod1}\n",
    );

    let (settings, warnings) = count_warnings(|| Settings::load(&ctx));

    assert_eq!(settings.unwrap().environment.modkey, "mod1");
    assert_eq!(warnings, 1);
}

#[test]
fn user_file_shadows_default_without_warning() {
    let (_dir, ctx) = setup();
    write(ctx.config_home(), "config.yml", "environment: {modkey: mod1}\n");
    write(
        ctx.config_home(),
        "config_default.yml",
        "environment: {modkey: mod4}\n",
    );

    let (settings, warnings) = count_warnings(|| Settings::load(&ctx));

    assert_eq!(settings.unwrap().environment.modkey, "mod1");
    assert_eq!(warnings, 0);
}

#[test]
fn malformed_layer_is_skipped() {
    let (_dir, ctx) = setup();
    write(ctx.config_home(), "colors.yml", "colors: [unclosed\n");
    write(ctx.config_home(), "config.yml", "environment: {modkey: mod1}\n");

    let (settings, warnings) = count_warnings(|| Settings::load(&ctx));

    assert_eq!(settings.unwrap().environment.modkey, "mod1");
    assert_eq!(warnings, 1);
}

#[test]
fn uncoercible_field_is_an_error() {
    let (_dir, ctx) = setup();
    write(
        ctx.config_home(),
        "config.yml",
        "environment: {wallpaper_timeout: soon}\n",
    );

    let err = Settings::load(&ctx).unwrap_err();

    assert!(matches!(err, HearthError::InvalidConfigField { .. }));
}

#[test]
fn no_sources_gives_defaults() {
    let (_dir, ctx) = setup();

    let settings = Settings::load(&ctx).unwrap();

    assert_eq!(settings, Settings::new(ctx.clone()));
}

#[test]
fn theme_from_disk_is_idempotent() {
    let (_dir, ctx) = setup();
    write(ctx.config_home(), "config.yml", "colors:\n  fg: '#111'\n  bg: '#000'\n");
    write(
        &ctx.theme_home(),
        "nord.yml",
        "colors:\n  fg: '#eceff4'\n",
    );

    let mut settings = Settings::load(&ctx).unwrap();
    apply_theme(&ctx, "$theme/nord.yml", &mut settings);
    let once = settings.clone();
    apply_theme(&ctx, "$theme/nord.yml", &mut settings);

    assert_eq!(settings, once);
    assert_eq!(settings.colors.get("fg"), "#eceff4");
    assert_eq!(settings.colors.get("bg"), "#000");
}
