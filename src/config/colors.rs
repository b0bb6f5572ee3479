use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::{RawSection, raw::scalar_to_string};
use crate::{HearthError, Result};

/// Palette entries every consumer may rely on.
///
/// Bars, layouts, the lock screen and the notification style all look these
/// names up, so each one must resolve to a non-empty value.
pub const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("fg_normal", "#D8DEE9"),
    ("fg_focus", "#C4C7C5"),
    ("fg_urgent", "#CC9393"),
    ("bg_normal", "#263238"),
    ("bg_focus", "#1E2320"),
    ("bg_urgent", "#424242"),
    ("bg_systray", "#37444b"),
    ("bg_selected", "#5c6b73"),
    ("fg_blue", "#304FFE"),
    ("fg_light_blue", "#B3E5FC"),
    ("fg_yellow", "#FFFF00"),
    ("fg_red", "#D50000"),
    ("fg_orange", "#FFC107"),
    ("fg_purple", "#AA00FF"),
    ("fg_green", "#4BC1CC"),
    ("fg_gray", "#9db4c0"),
    ("fg_black", "#000000"),
    ("fg_white", "#ffffff"),
    ("fg_selected", "#AA00FF"),
    ("bg_topbar", "#282a36"),
    ("bg_topbar_arrow", "#5c6b73"),
    ("bg_topbar_selected", "#6200EA"),
    ("border_color_normal", "#AA00FF"),
    ("border_color_active", "#6200EA"),
    ("border_color_marked", "#c678dd"),
    ("titlebar_bg_focus", "#263238"),
    ("titlebar_bg_normal", "#253238"),
    ("taglist_bg_focus", "#37474F"),
    ("group_focus", "#e0fbfc"),
    ("group_normal", "#C4C7C5"),
    ("lock_screen_blank_color", "#00000000"),
    ("lock_screen_clear_color", "#ffffff22"),
    ("lock_screen_default_color", "#9db4c0"),
    ("lock_screen_key_color", "#8a8ea800"),
    ("lock_screen_text_color", "#4BC1CC"),
    ("lock_screen_wrong_color", "#D50000"),
    ("lock_screen_verifying_color", "#41445800"),
    ("lock_screen_quote_foreground_color", "#000"),
    ("lock_screen_quote_text_color", "#fff"),
    ("rofi_background", "#263238"),
    ("rofi_background_alt", "#37444b"),
    ("rofi_foreground", "#D8DEE9"),
    ("rofi_selected", "#6200EA"),
    ("rofi_active", "#4BC1CC"),
    ("rofi_urgent", "#D50000"),
    ("rofi_border", "#AA00FF"),
    ("rofi_border_alt", "#6200EA"),
];

/// Open-ended color palette.
///
/// Names map to color strings. The builtin [`DEFAULT_PALETTE`] is overlaid
/// by whatever the colors document declares; the declared payload is kept
/// as [`Colors::raw`] so a theme can be merged into it later and the palette
/// rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Colors {
    /// Theme document applied last, if any.
    pub theme: Option<String>,

    /// Effective palette: defaults first, then declared names in order.
    palette: IndexMap<String, String>,

    #[serde(skip)]
    #[schemars(skip)]
    raw: Mapping,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            theme: None,
            palette: default_palette(),
            raw: Mapping::new(),
        }
    }
}

impl Colors {
    /// Builds the palette from a colors payload.
    ///
    /// A `theme` key names the theme document to overlay at startup; every
    /// other key is a palette entry.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry holds a mapping or a sequence.
    pub fn from_raw(map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("colors", map);
        let mut palette = default_palette();

        for (key, value) in map {
            let Some(name) = key.as_str() else {
                continue;
            };
            if name == "theme" {
                continue;
            }

            let color = scalar_to_string(value).ok_or_else(|| {
                HearthError::invalid_field(
                    raw.component(),
                    name,
                    "expected a color string, found a collection",
                )
            })?;
            palette.insert(name.to_string(), color);
        }

        Ok(Self {
            theme: raw.opt_string("theme")?.filter(|t| !t.is_empty()),
            palette,
            raw: map.clone(),
        })
    }

    /// The payload this palette was built from.
    pub fn raw(&self) -> &Mapping {
        &self.raw
    }

    /// Looks up a palette entry; unknown names read as an empty string.
    pub fn get(&self, name: &str) -> &str {
        self.palette.get(name).map_or("", String::as_str)
    }

    /// Resolves a symbolic name, passing literal colors through.
    ///
    /// `"fg_orange"` becomes its palette value while `"#ff0000"` (or any
    /// name the palette does not know) is returned unchanged.
    pub fn get_color<'a>(&'a self, name_or_value: &'a str) -> &'a str {
        self.palette
            .get(name_or_value)
            .map_or(name_or_value, String::as_str)
    }

    /// Whether `name` is a palette entry.
    pub fn contains(&self, name: &str) -> bool {
        self.palette.contains_key(name)
    }

    /// All palette entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.palette.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inserts or replaces a palette entry, keeping `raw` in step.
    pub fn set(&mut self, name: &str, color: &str) {
        self.palette.insert(name.to_string(), color.to_string());
        self.raw
            .insert(Value::from(name), Value::from(color));
    }
}

fn default_palette() -> IndexMap<String, String> {
    DEFAULT_PALETTE
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_builtin_name() {
        let colors = Colors::default();

        for (name, _) in DEFAULT_PALETTE {
            assert!(!colors.get(name).is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn unknown_names_read_as_empty() {
        assert_eq!(Colors::default().get("fg_mauve"), "");
    }

    #[test]
    fn declared_entries_override_and_extend() {
        let map: Mapping =
            serde_yaml::from_str("fg_normal: '#111'\nfg_mauve: '#e0b0ff'\ntheme: $theme/nord.yml")
                .unwrap();

        let colors = Colors::from_raw(&map).unwrap();

        assert_eq!(colors.get("fg_normal"), "#111");
        assert_eq!(colors.get("fg_mauve"), "#e0b0ff");
        assert_eq!(colors.get("bg_normal"), "#263238");
        assert_eq!(colors.theme.as_deref(), Some("$theme/nord.yml"));
        assert!(!colors.contains("theme"));
        assert_eq!(colors.raw()["fg_normal"], Value::from("#111"));
    }

    #[test]
    fn get_color_passes_literals_through() {
        let colors = Colors::default();

        assert_eq!(colors.get_color("fg_orange"), "#FFC107");
        assert_eq!(colors.get_color("#ff0000"), "#ff0000");
    }

    #[test]
    fn collection_entries_are_rejected() {
        let map: Mapping = serde_yaml::from_str("fg_normal: [a, b]").unwrap();

        assert!(Colors::from_raw(&map).is_err());
    }

    #[test]
    fn set_updates_raw_backing() {
        let mut colors = Colors::default();
        colors.set("fg_normal", "#222");

        assert_eq!(colors.get("fg_normal"), "#222");
        assert_eq!(colors.raw()["fg_normal"], Value::from("#222"));
    }
}
