use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::{RawSection, loading::value_kind};
use crate::{HearthError, Result};

/// Screen edge the bar is anchored to.
#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BarPosition {
    /// Top edge.
    #[default]
    Top,

    /// Bottom edge.
    Bottom,
}

impl fmt::Display for BarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarPosition::Top => write!(f, "top"),
            BarPosition::Bottom => write!(f, "bottom"),
        }
    }
}

impl FromStr for BarPosition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(BarPosition::Top),
            "bottom" => Ok(BarPosition::Bottom),
            other => Err(format!("unknown bar position '{other}', expected top or bottom")),
        }
    }
}

/// One bar widget: a type tag plus its free-form arguments.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct WidgetSpec {
    /// Widget type, e.g. `clock` or `cpu`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Every other key of the widget entry, in declaration order.
    #[schemars(with = "serde_json::Map<String, serde_json::Value>")]
    pub args: Mapping,
}

impl WidgetSpec {
    fn from_value(index: usize, value: &Value) -> Result<Self> {
        let Value::Mapping(entry) = value else {
            return Err(HearthError::invalid_field(
                "bar",
                &format!("widgets[{index}]"),
                format!("expected a mapping, found {}", value_kind(value)),
            ));
        };

        let mut args = entry.clone();
        let kind = args
            .shift_remove("type")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        Ok(Self { kind, args })
    }
}

/// Bar geometry and widget order.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Bar {
    /// Anchoring edge.
    pub position: BarPosition,

    /// Bar thickness in pixels.
    pub size: u32,

    /// Margin in pixels: top, right, bottom, left.
    pub margin: [i32; 4],

    /// Widgets in left-to-right rendering order.
    pub widgets: Vec<WidgetSpec>,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            position: BarPosition::Top,
            size: 32,
            margin: [8, 8, 0, 8],
            widgets: Vec::new(),
        }
    }
}

impl Bar {
    /// Builds the section from its raw payload, defaulting missing fields.
    ///
    /// `margin` may be a sequence or comma-separated text holding either one
    /// value for every side or four values.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown position, a non-numeric size or
    /// margin, or a widget entry that is not a mapping.
    pub fn from_raw(map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("bar", map);
        let defaults = Self::default();

        let position = match raw.opt_string("position")? {
            Some(text) => text
                .parse::<BarPosition>()
                .map_err(|reason| HearthError::invalid_field("bar", "position", reason))?,
            None => defaults.position,
        };

        let margin = match raw.number_list::<i32>("margin", ',')? {
            None => defaults.margin,
            Some(values) => match values.as_slice() {
                [all] => [*all; 4],
                [top, right, bottom, left] => [*top, *right, *bottom, *left],
                other => {
                    return Err(HearthError::invalid_field(
                        "bar",
                        "margin",
                        format!("expected 1 or 4 values, found {}", other.len()),
                    ));
                }
            },
        };

        let widgets = match raw.get("widgets") {
            None => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| WidgetSpec::from_value(i, item))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(HearthError::invalid_field(
                    "bar",
                    "widgets",
                    format!("expected a sequence, found {}", value_kind(other)),
                ));
            }
        };

        Ok(Self {
            position,
            size: raw.number("size", defaults.size)?,
            margin,
            widgets,
        })
    }
}
