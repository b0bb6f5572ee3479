use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::Mapping;

use super::RawSection;
use crate::Result;

/// Per-application metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, JsonSchema)]
pub struct Applications {
    /// Icon glyph by window class.
    pub icons: IndexMap<String, String>,
}

impl Applications {
    /// Builds the section from its raw payload.
    ///
    /// # Errors
    ///
    /// Returns an error if `icons` is not a flat mapping.
    pub fn from_raw(map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("applications", map);

        Ok(Self {
            icons: raw.string_map("icons")?.unwrap_or_default(),
        })
    }

    /// Icon for a window class, matched case-insensitively.
    pub fn icon_for(&self, wm_class: &str) -> Option<&str> {
        self.icons
            .iter()
            .find(|(class, _)| class.eq_ignore_ascii_case(wm_class))
            .map(|(_, icon)| icon.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_match_ignoring_case() {
        let map: Mapping = serde_yaml::from_str("icons:\n  firefox: F\n  kitty: K").unwrap();

        let apps = Applications::from_raw(&map).unwrap();

        assert_eq!(apps.icon_for("Firefox"), Some("F"));
        assert_eq!(apps.icon_for("code"), None);
    }
}
