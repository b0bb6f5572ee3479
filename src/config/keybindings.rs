use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::warn;

use super::{RawSection, loading::value_kind};
use crate::{HearthError, Result};

/// Display group used when a binding does not name one.
pub const DEFAULT_GROUP: &str = "custom";

/// One declarative keybinding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct KeyBinding {
    /// Label shown in the keybinding overview.
    pub name: String,

    /// Chord tokens; the last one is the key, the rest are modifiers.
    pub keys: Vec<String>,

    /// Action identifier, e.g. `spawn` or `focus_left`.
    pub action: String,

    /// Command template, command name or dropdown name, depending on the action.
    pub command: Option<String>,

    /// Display category.
    pub group: String,
}

impl Default for KeyBinding {
    fn default() -> Self {
        Self {
            name: String::new(),
            keys: Vec::new(),
            action: String::new(),
            command: None,
            group: DEFAULT_GROUP.to_string(),
        }
    }
}

impl KeyBinding {
    /// Builds one binding from its raw entry.
    ///
    /// `keys` is space-separated text (`"$mod shift Return"`) or a sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if a field holds a value of the wrong shape.
    pub fn from_raw(map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("keybindings", map);

        Ok(Self {
            name: raw.string("name", "")?,
            keys: raw.list("keys", ' ', &[])?,
            action: raw.string("action", "")?,
            command: raw.opt_string("command")?.filter(|c| !c.is_empty()),
            group: raw.string("group", DEFAULT_GROUP)?,
        })
    }

    /// Chord tokens with `$mod` replaced by `modkey`.
    pub fn chord(&self, modkey: &str) -> Vec<String> {
        self.keys.iter().map(|k| k.replace("$mod", modkey)).collect()
    }
}

/// Builds the binding list from the raw `keybindings` value.
///
/// Entries are independent: one that cannot be built is skipped with a
/// warning naming its index, and the rest are kept in order. A value that
/// is not a sequence yields no bindings.
pub fn build_keybindings(value: &Value) -> Vec<KeyBinding> {
    let items = match value {
        Value::Null => return Vec::new(),
        Value::Sequence(items) => items,
        other => {
            warn!(
                "Ignoring keybindings: expected a list, found {}",
                value_kind(other)
            );
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match build_entry(item) {
            Ok(binding) => Some(binding),
            Err(e) => {
                warn!("Skipping keybinding #{index}: {e}");
                None
            }
        })
        .collect()
}

fn build_entry(item: &Value) -> Result<KeyBinding> {
    match item {
        Value::Mapping(map) => KeyBinding::from_raw(map),
        other => Err(HearthError::ConfigValidation {
            component: "keybindings".to_string(),
            details: format!("expected a mapping, found {}", value_kind(other)),
        }),
    }
}
