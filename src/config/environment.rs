use std::{env, path::Path};

use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::Mapping;

use super::{PathContext, RawSection, template::resolve_path};
use crate::Result;

const KNOWN_TERMINALS: &[&str] = &[
    "kitty",
    "alacritty",
    "foot",
    "wezterm",
    "gnome-terminal",
    "konsole",
    "xfce4-terminal",
    "urxvt",
    "xterm",
];

/// Programs, directories and integration tokens of the desktop session.
///
/// Path-valued fields are resolved through the template resolver when the
/// section is built, so `$home/wallpapers` is stored as an absolute path.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Environment {
    /// Modifier key substituted for `$mod` in key chords.
    pub modkey: String,

    /// Browser launched by the `browser` action.
    pub browser: String,

    /// Terminal launched by the `terminal` action.
    pub terminal: String,

    /// Directory of wallpaper images.
    pub wallpaper_dir: String,

    /// Minutes between wallpaper rotations.
    pub wallpaper_timeout: u32,

    /// Path of the distribution logo image.
    pub os_logo: String,

    /// Glyph shown as the distribution icon.
    pub os_logo_icon: String,

    /// Symbolic color of the distribution icon.
    pub os_logo_icon_color: String,

    /// Name of the desktop theme.
    pub theme: String,

    /// Backlight device name.
    pub backlight_name: String,

    /// API key of the weather provider.
    pub weather_api_key: String,

    /// City identifier for weather lookups.
    pub city_id: String,

    /// Token used to poll GitHub notifications.
    pub github_notifications_token: String,

    /// Root of the rofi menu assets.
    pub rofi_home: String,

    /// Root of the helper scripts.
    pub scripts: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self::with_terminal(guess_terminal())
    }
}

impl Environment {
    fn with_terminal(terminal: String) -> Self {
        Self {
            modkey: "mod4".to_string(),
            browser: "firefox".to_string(),
            terminal,
            wallpaper_dir: String::new(),
            wallpaper_timeout: 60,
            os_logo: String::new(),
            os_logo_icon: String::new(),
            os_logo_icon_color: String::new(),
            theme: "hearth".to_string(),
            backlight_name: String::new(),
            weather_api_key: String::new(),
            city_id: String::new(),
            github_notifications_token: String::new(),
            rofi_home: String::new(),
            scripts: String::new(),
        }
    }

    /// Builds the section from its raw payload, defaulting missing fields.
    ///
    /// The terminal is only guessed when `terminal` is not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if `wallpaper_timeout` is not a number or any field
    /// holds a mapping or sequence.
    pub fn from_raw(ctx: &PathContext, map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("environment", map);
        let defaults = Self::with_terminal(String::new());
        let terminal = match raw.opt_string("terminal")? {
            Some(terminal) => terminal,
            None => guess_terminal(),
        };

        Ok(Self {
            modkey: raw.string("modkey", &defaults.modkey)?,
            browser: raw.string("browser", &defaults.browser)?,
            terminal,
            wallpaper_dir: resolve_path(ctx, &raw.string("wallpaper_dir", &defaults.wallpaper_dir)?),
            wallpaper_timeout: raw.number("wallpaper_timeout", defaults.wallpaper_timeout)?,
            os_logo: resolve_path(ctx, &raw.string("os_logo", &defaults.os_logo)?),
            os_logo_icon: raw.string("os_logo_icon", &defaults.os_logo_icon)?,
            os_logo_icon_color: raw.string("os_logo_icon_color", &defaults.os_logo_icon_color)?,
            theme: raw.string("theme", &defaults.theme)?,
            backlight_name: raw.string("backlight_name", &defaults.backlight_name)?,
            weather_api_key: raw.string("weather_api_key", &defaults.weather_api_key)?,
            city_id: raw.string("city_id", &defaults.city_id)?,
            github_notifications_token: raw
                .string("github_notifications_token", &defaults.github_notifications_token)?,
            rofi_home: resolve_path(ctx, &raw.string("rofi_home", &defaults.rofi_home)?),
            scripts: resolve_path(ctx, &raw.string("scripts", &defaults.scripts)?),
        })
    }

    /// Rofi root, falling back to the context's builtin directory when unset.
    pub fn rofi_home_or(&self, ctx: &PathContext) -> String {
        if self.rofi_home.is_empty() {
            ctx.rofi_home().to_string_lossy().into_owned()
        } else {
            self.rofi_home.clone()
        }
    }
}

/// Picks a terminal emulator: `$TERMINAL` first, then the first known
/// terminal found on `PATH`, then `xterm`.
pub fn guess_terminal() -> String {
    if let Some(terminal) = env::var("TERMINAL").ok().filter(|t| !t.trim().is_empty()) {
        return terminal;
    }

    let Some(path) = env::var_os("PATH") else {
        return "xterm".to_string();
    };
    let dirs: Vec<_> = env::split_paths(&path).collect();

    KNOWN_TERMINALS
        .iter()
        .find(|name| dirs.iter().any(|dir| is_file(&dir.join(name))))
        .map_or_else(|| "xterm".to_string(), |name| name.to_string())
}

fn is_file(path: &Path) -> bool {
    path.metadata().is_ok_and(|m| m.is_file())
}
