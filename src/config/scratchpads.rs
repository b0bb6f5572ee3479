use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::{RawSection, loading::value_kind};
use crate::{HearthError, Result};

/// A dropdown window toggled from the scratchpad group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, JsonSchema)]
pub struct DropdownSpec {
    /// Name of the dropdown, identical to its key in [`Scratchpads`].
    pub name: String,

    /// Command (or name of an entry in `commands`) that opens the window.
    pub command: String,

    /// Window placement and appearance options.
    #[schemars(with = "serde_json::Map<String, serde_json::Value>")]
    pub args: Mapping,
}

/// Dropdowns keyed by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, JsonSchema)]
pub struct Scratchpads {
    /// Dropdowns in declaration order.
    pub dropdowns: IndexMap<String, DropdownSpec>,
}

impl Scratchpads {
    /// Builds the section from its raw payload.
    ///
    /// # Errors
    ///
    /// Returns an error if a dropdown entry is not a mapping or its fields
    /// have the wrong shape.
    pub fn from_raw(map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("scratchpads", map);
        let Some(entries) = raw.mapping("dropdowns")? else {
            return Ok(Self::default());
        };

        let mut dropdowns = IndexMap::new();
        for (key, value) in entries {
            let Some(name) = key.as_str() else {
                continue;
            };

            let Value::Mapping(entry) = value else {
                return Err(HearthError::invalid_field(
                    "scratchpads",
                    &format!("dropdowns.{name}"),
                    format!("expected a mapping, found {}", value_kind(value)),
                ));
            };

            let section = RawSection::new("scratchpads", entry);
            let dropdown = DropdownSpec {
                name: name.to_string(),
                command: section.string("command", "")?,
                args: section.mapping("args")?.cloned().unwrap_or_default(),
            };
            dropdowns.insert(name.to_string(), dropdown);
        }

        Ok(Self { dropdowns })
    }

    /// Looks up a dropdown by name.
    pub fn get(&self, name: &str) -> Option<&DropdownSpec> {
        self.dropdowns.get(name)
    }

    /// Whether no dropdowns are configured.
    pub fn is_empty(&self) -> bool {
        self.dropdowns.is_empty()
    }
}
