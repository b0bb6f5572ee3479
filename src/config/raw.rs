//! Field-level coercion from raw YAML mappings.
//!
//! Every typed settings section reads its payload through [`RawSection`],
//! which applies the field's default when the key is missing (or null) and
//! reports values that cannot be coerced as [`HearthError::InvalidConfigField`].

use std::{fmt::Display, str::FromStr};

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use super::loading::value_kind;
use crate::{HearthError, Result};

/// Read-only view over one settings section's raw payload.
#[derive(Debug, Clone, Copy)]
pub struct RawSection<'a> {
    component: &'static str,
    map: &'a Mapping,
}

impl<'a> RawSection<'a> {
    /// Wraps `map` as the payload of `component`.
    pub fn new(component: &'static str, map: &'a Mapping) -> Self {
        Self { component, map }
    }

    /// Name of the section used in error messages.
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// Returns the raw value for `key`, treating an explicit null as missing.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// Reads a scalar as text, e.g. `60` becomes `"60"`.
    pub fn string(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.opt_string(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Reads an optional scalar as text.
    pub fn opt_string(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
            .map(|value| {
                scalar_to_string(value).ok_or_else(|| self.invalid(key, "a scalar", value))
            })
            .transpose()
    }

    /// Reads a number given either as a YAML number or as numeric text.
    pub fn number<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };

        let text = match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.trim().to_string(),
            other => return Err(self.invalid(key, "a number", other)),
        };

        text.parse::<T>().map_err(|e| {
            HearthError::invalid_field(self.component, key, format!("'{text}' is not valid: {e}"))
        })
    }

    /// Reads a yes/no flag.
    ///
    /// Text compares against the literal `truthy` token, so anything other
    /// than that exact token is false. YAML booleans pass through.
    pub fn flag(&self, key: &str, truthy: &str, default: bool) -> Result<bool> {
        match self.get(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) => Ok(s == truthy),
            Some(other) => Err(self.invalid(key, "a yes/no flag", other)),
        }
    }

    /// Reads a list given either as a sequence or as delimited text.
    ///
    /// Items are trimmed and empty items are dropped. A space delimiter
    /// splits on any run of whitespace.
    pub fn list(&self, key: &str, delimiter: char, default: &[&str]) -> Result<Vec<String>> {
        let Some(value) = self.get(key) else {
            return Ok(default.iter().map(|s| s.to_string()).collect());
        };

        match value {
            Value::String(s) => Ok(split_list(s, delimiter)),
            Value::Number(n) => Ok(vec![n.to_string()]),
            Value::Sequence(items) => items
                .iter()
                .map(|item| {
                    scalar_to_string(item).ok_or_else(|| self.invalid(key, "a list of scalars", item))
                })
                .collect(),
            other => Err(self.invalid(key, "a list", other)),
        }
    }

    /// Reads a list of numbers, given as a sequence or delimited text.
    pub fn number_list<T>(&self, key: &str, delimiter: char) -> Result<Option<Vec<T>>>
    where
        T: FromStr,
        T::Err: Display,
    {
        if self.get(key).is_none() {
            return Ok(None);
        }

        self.list(key, delimiter, &[])?
            .into_iter()
            .map(|item| {
                item.parse::<T>().map_err(|e| {
                    HearthError::invalid_field(
                        self.component,
                        key,
                        format!("'{item}' is not valid: {e}"),
                    )
                })
            })
            .collect::<Result<Vec<T>>>()
            .map(Some)
    }

    /// Reads a nested mapping.
    pub fn mapping(&self, key: &str) -> Result<Option<&'a Mapping>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Mapping(m)) => Ok(Some(m)),
            Some(other) => Err(self.invalid(key, "a mapping", other)),
        }
    }

    /// Reads a flat mapping of text values, keeping declaration order.
    pub fn string_map(&self, key: &str) -> Result<Option<IndexMap<String, String>>> {
        let Some(map) = self.mapping(key)? else {
            return Ok(None);
        };

        map.iter()
            .map(|(k, v)| {
                let name = scalar_to_string(k).ok_or_else(|| self.invalid(key, "text keys", k))?;
                let text = scalar_to_string(v).ok_or_else(|| {
                    HearthError::invalid_field(
                        self.component,
                        &format!("{key}.{name}"),
                        format!("expected a scalar, found {}", value_kind(v)),
                    )
                })?;
                Ok((name, text))
            })
            .collect::<Result<IndexMap<_, _>>>()
            .map(Some)
    }

    fn invalid(&self, key: &str, expected: &str, found: &Value) -> HearthError {
        HearthError::invalid_field(
            self.component,
            key,
            format!("expected {expected}, found {}", value_kind(found)),
        )
    }
}

/// Renders a scalar as text; `None` for mappings, sequences and tagged values.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

fn split_list(text: &str, delimiter: char) -> Vec<String> {
    let parts: Vec<&str> = if delimiter == ' ' {
        text.split_whitespace().collect()
    } else {
        text.split(delimiter).collect()
    };

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
