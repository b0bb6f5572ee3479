use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::{debug, info, instrument, warn};

use super::{
    Applications, Bar, Colors, Environment, Fonts, KeyBinding, LockScreen, Monitoring,
    PathContext, RawSection, Scratchpads,
    keybindings::build_keybindings,
    loading::{self, SourceFiles},
    scratchpads::DropdownSpec,
    template::{Variables, build_shell_command},
};
use crate::Result;

/// Top-level keys read by [`Settings::from_raw`]; anything else is ignored.
pub const TOP_LEVEL_KEYS: [&str; 15] = [
    "applications",
    "bar",
    "colors",
    "commands",
    "environment",
    "floating",
    "fonts",
    "groups",
    "groups_layout",
    "layouts",
    "keybindings",
    "lock_screen",
    "monitoring",
    "scratchpads",
    "startup",
];

/// Layouts the window manager knows how to build.
pub const KNOWN_LAYOUTS: &[&str] = &[
    "bsp",
    "columns",
    "floating",
    "max",
    "matrix",
    "monadtall",
    "monadthreecol",
    "monadwide",
    "plasma",
    "ratiotile",
    "screensplit",
    "slice",
    "spiral",
    "stack",
    "tile",
    "treetab",
    "verticaltile",
    "zoomy",
];

const FALLBACK_GROUP_LAYOUT: &str = "monadtall";

/// Window matching rules that force floating.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, JsonSchema)]
pub struct Floating {
    /// Window classes that always float.
    pub wm_class: Vec<String>,
    /// Window titles that always float.
    pub title: Vec<String>,
}

impl Floating {
    /// Builds the rules from their raw payload.
    ///
    /// # Errors
    ///
    /// Returns an error if either list holds a collection.
    pub fn from_raw(map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("floating", map);

        Ok(Self {
            wm_class: raw.list("wm_class", ',', &[])?,
            title: raw.list("title", ',', &[])?,
        })
    }

    /// Whether a window with this class or title should float.
    pub fn matches(&self, wm_class: &str, title: &str) -> bool {
        self.wm_class.iter().any(|c| c == wm_class) || self.title.iter().any(|t| t == title)
    }
}

/// A workspace group ready for the window manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSpec {
    /// 1-based group number, also the key that selects it.
    pub name: String,
    /// Key of the group in the `groups` mapping.
    pub key: String,
    /// Padded label shown in the bar.
    pub label: String,
    /// Layout the group opens with.
    pub layout: String,
}

/// A window layout with its effective arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSpec {
    /// Layout name, one of [`KNOWN_LAYOUTS`].
    pub name: String,
    /// Builtin defaults overlaid by the configured arguments.
    pub args: Mapping,
}

/// A startup command after template resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartupCommand {
    /// Key of the command in the `startup` mapping.
    pub name: String,
    /// Resolved shell command.
    pub command: String,
}

/// Fully typed desktop settings.
///
/// Built once per load from the merged source documents. Every section
/// falls back to its defaults when the corresponding top-level key is
/// missing.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Settings {
    /// Per-application metadata.
    pub applications: Applications,
    /// Bar geometry and widgets.
    pub bar: Bar,
    /// Color palette.
    pub colors: Colors,
    /// Named shell command templates.
    pub commands: IndexMap<String, String>,
    /// Programs, directories and tokens.
    pub environment: Environment,
    /// Floating window rules.
    pub floating: Floating,
    /// Font roles.
    pub fonts: Fonts,
    /// Workspace groups: key to label.
    pub groups: IndexMap<String, String>,
    /// Layout per group key, with a `default` entry.
    pub groups_layout: IndexMap<String, String>,
    /// Layout arguments by layout name.
    #[schemars(with = "IndexMap<String, serde_json::Map<String, serde_json::Value>>")]
    pub layouts: IndexMap<String, Mapping>,
    /// Declarative keybindings.
    pub keybindings: Vec<KeyBinding>,
    /// Lock screen settings.
    pub lock_screen: LockScreen,
    /// Sensor thresholds and colors.
    pub monitoring: Monitoring,
    /// Dropdown windows.
    pub scratchpads: Scratchpads,
    /// Commands run once at session start.
    pub startup: IndexMap<String, String>,

    #[serde(skip)]
    #[schemars(skip)]
    paths: PathContext,
}

impl Settings {
    /// Settings holding only defaults.
    pub fn new(paths: PathContext) -> Self {
        Self {
            applications: Applications::default(),
            bar: Bar::default(),
            colors: Colors::default(),
            commands: IndexMap::new(),
            environment: Environment::default(),
            floating: Floating::default(),
            fonts: Fonts::default(),
            groups: IndexMap::new(),
            groups_layout: IndexMap::from([(
                "default".to_string(),
                FALLBACK_GROUP_LAYOUT.to_string(),
            )]),
            layouts: IndexMap::new(),
            keybindings: Vec::new(),
            lock_screen: LockScreen::default(),
            monitoring: Monitoring::default(),
            scratchpads: Scratchpads::default(),
            startup: IndexMap::new(),
            paths,
        }
    }

    /// Discovers the source documents under the configuration root and
    /// builds settings from them.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a section holds a
    /// value that cannot be coerced.
    pub fn load(ctx: &PathContext) -> Result<Self> {
        Self::load_from(ctx, SourceFiles::default())
    }

    /// Builds settings from explicit sources, discovering the unset ones.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a section holds a
    /// value that cannot be coerced.
    #[instrument(skip_all, fields(config_home = %ctx.config_home().display()))]
    pub fn load_from(ctx: &PathContext, files: SourceFiles) -> Result<Self> {
        let raw = Self::load_raw(ctx, files)?;
        let settings = Self::from_raw(ctx, &raw)?;

        info!(
            keybindings = settings.keybindings.len(),
            commands = settings.commands.len(),
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Merges the source documents without building typed sections.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be read.
    pub fn load_raw(ctx: &PathContext, files: SourceFiles) -> Result<Mapping> {
        let files = files.fill_missing(ctx);
        loading::load(&files.ordered())
    }

    /// Builds settings from an already merged tree.
    ///
    /// # Errors
    ///
    /// Returns an error if a section holds a value that cannot be coerced.
    /// Malformed keybinding entries are skipped instead.
    pub fn from_raw(ctx: &PathContext, raw: &Mapping) -> Result<Self> {
        let root = RawSection::new("settings", raw);
        let mut settings = Self::new(ctx.clone());

        let unknown: Vec<&str> = raw
            .keys()
            .filter_map(Value::as_str)
            .filter(|k| !TOP_LEVEL_KEYS.contains(k))
            .collect();
        if !unknown.is_empty() {
            debug!(?unknown, "ignoring unknown top-level keys");
        }

        if let Some(map) = root.mapping("applications")? {
            settings.applications = Applications::from_raw(map)?;
        }
        if let Some(map) = root.mapping("bar")? {
            settings.bar = Bar::from_raw(map)?;
        }
        if let Some(map) = root.mapping("colors")? {
            settings.colors = Colors::from_raw(map)?;
        }
        if let Some(commands) = root.string_map("commands")? {
            settings.commands = commands;
        }
        if let Some(map) = root.mapping("environment")? {
            settings.environment = Environment::from_raw(ctx, map)?;
        }
        if let Some(map) = root.mapping("floating")? {
            settings.floating = Floating::from_raw(map)?;
        }
        if let Some(map) = root.mapping("fonts")? {
            settings.fonts = Fonts::from_raw(map)?;
        }
        if let Some(groups) = root.string_map("groups")? {
            settings.groups = groups;
        }
        if let Some(groups_layout) = root.string_map("groups_layout")? {
            settings.groups_layout = groups_layout;
        }
        if let Some(map) = root.mapping("layouts")? {
            settings.layouts = layouts_from_raw(map);
        }
        if let Some(value) = root.get("keybindings") {
            settings.keybindings = build_keybindings(value);
        }
        if let Some(map) = root.mapping("lock_screen")? {
            settings.lock_screen = LockScreen::from_raw(ctx, map)?;
        }
        if let Some(map) = root.mapping("monitoring")? {
            settings.monitoring = Monitoring::from_raw(map)?;
        }
        if let Some(map) = root.mapping("scratchpads")? {
            settings.scratchpads = Scratchpads::from_raw(map)?;
        }
        if let Some(startup) = root.string_map("startup")? {
            settings.startup = startup;
        }

        settings.check_color_references();
        Ok(settings)
    }

    /// Directory roots the settings were built against.
    pub fn paths(&self) -> &PathContext {
        &self.paths
    }

    /// Resolves a named command with call-site values.
    ///
    /// Returns `None` when no command is configured under `name`.
    pub fn command(&self, name: &str, extra: &Variables) -> Option<String> {
        self.commands
            .get(name)
            .map(|raw| build_shell_command(&self.paths, raw, extra))
    }

    /// Command that opens a dropdown.
    ///
    /// The dropdown's command may name an entry in `commands`; otherwise it
    /// is used as written.
    pub fn dropdown_command(&self, dropdown: &DropdownSpec) -> String {
        let raw = self
            .commands
            .get(&dropdown.command)
            .unwrap_or(&dropdown.command);
        build_shell_command(&self.paths, raw, &Variables::new())
    }

    /// Startup commands in declaration order.
    ///
    /// Templates may use `$lock_screen_timeout`, `$wallpaper_dir` and
    /// `$wallpaper_timeout` (in seconds).
    pub fn startup_commands(&self) -> Vec<StartupCommand> {
        let values = Variables::from([
            (
                "lock_screen_timeout".to_string(),
                self.lock_screen.timeout.to_string(),
            ),
            (
                "wallpaper_dir".to_string(),
                self.environment.wallpaper_dir.clone(),
            ),
            (
                "wallpaper_timeout".to_string(),
                (u64::from(self.environment.wallpaper_timeout) * 60).to_string(),
            ),
        ]);

        self.startup
            .iter()
            .map(|(name, raw)| StartupCommand {
                name: name.clone(),
                command: build_shell_command(&self.paths, raw, &values),
            })
            .collect()
    }

    /// Workspace groups numbered from 1 in declaration order.
    pub fn group_specs(&self) -> Vec<GroupSpec> {
        let default_layout = self
            .groups_layout
            .get("default")
            .map_or(FALLBACK_GROUP_LAYOUT, String::as_str);

        self.groups
            .iter()
            .enumerate()
            .map(|(i, (key, label))| GroupSpec {
                name: (i + 1).to_string(),
                key: key.clone(),
                label: format!("  {}  ", label.trim()),
                layout: self
                    .groups_layout
                    .get(key)
                    .map_or(default_layout, String::as_str)
                    .to_string(),
            })
            .collect()
    }

    /// Configured layouts with their effective arguments.
    ///
    /// Every layout starts from a border width of 4, a margin of 8 and the
    /// palette's border colors. Unknown layout names are skipped with a
    /// warning.
    pub fn layout_specs(&self) -> Vec<LayoutSpec> {
        self.layouts
            .iter()
            .filter_map(|(name, configured)| {
                if !KNOWN_LAYOUTS.contains(&name.as_str()) {
                    warn!("Unknown layout: {name}");
                    return None;
                }

                let mut args = self.default_layout_args();
                for (key, value) in layout_overrides(name) {
                    args.insert(Value::from(key), value);
                }
                for (key, value) in configured {
                    args.insert(key.clone(), value.clone());
                }

                Some(LayoutSpec {
                    name: name.clone(),
                    args,
                })
            })
            .collect()
    }

    fn default_layout_args(&self) -> Mapping {
        let mut args = Mapping::new();
        args.insert("border_width".into(), 4.into());
        args.insert("margin".into(), 8.into());
        args.insert(
            "border_focus".into(),
            self.colors.get("border_color_normal").into(),
        );
        args.insert(
            "border_normal".into(),
            self.colors.get("border_color_active").into(),
        );
        args
    }

    fn check_color_references(&self) {
        let references = [
            ("monitoring.default_color", &self.monitoring.default_color),
            ("monitoring.medium_color", &self.monitoring.medium_color),
            ("monitoring.high_color", &self.monitoring.high_color),
        ];

        for (field, name) in references {
            if !name.starts_with('#') && !self.colors.contains(name) {
                warn!("{field} refers to unknown color '{name}'");
            }
        }
    }
}

fn layouts_from_raw(map: &Mapping) -> IndexMap<String, Mapping> {
    map.iter()
        .filter_map(|(key, value)| {
            let name = key.as_str()?.to_string();
            let args = match value {
                Value::Mapping(args) => args.clone(),
                Value::Null => Mapping::new(),
                other => {
                    warn!(
                        "Ignoring arguments of layout {name}: expected a mapping, found {}",
                        loading::value_kind(other)
                    );
                    Mapping::new()
                }
            };
            Some((name, args))
        })
        .collect()
}

fn layout_overrides(name: &str) -> Vec<(&'static str, Value)> {
    match name {
        "max" => vec![("border_width", 0.into()), ("margin", 0.into())],
        "tile" => vec![
            ("shift_windows", true.into()),
            ("border_width", 0.into()),
            ("margin", 0.into()),
            ("ratio", 0.335.into()),
        ],
        _ => Vec::new(),
    }
}
