use serde_yaml::Value;

use super::CliError;
use crate::config::loading::value_kind;

/// Follows a dotted path such as `environment.modkey` or `bar.widgets.0`.
///
/// Sequence elements are addressed by their index.
///
/// # Errors
///
/// Returns `CliError::ConfigError` naming the deepest valid prefix when a
/// key is missing, an index is invalid, or the path descends into a scalar.
pub fn navigate_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value, CliError> {
    let parts: Vec<&str> = path.split('.').filter(|p| !p.is_empty()).collect();
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        current = match current {
            Value::Mapping(map) => map.get(*part).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "Key '{}' not found at path '{}'",
                    part,
                    parts[..i].join(".")
                ))
            })?,
            Value::Sequence(items) => {
                let index = part.parse::<usize>().map_err(|_| {
                    CliError::ConfigError(format!(
                        "Invalid index '{}' at path '{}'",
                        part,
                        parts[..i].join(".")
                    ))
                })?;

                items.get(index).ok_or_else(|| {
                    CliError::ConfigError(format!(
                        "Index '{}' out of bounds at path '{}'",
                        index,
                        parts[..i].join(".")
                    ))
                })?
            }
            other => {
                return Err(CliError::ConfigError(format!(
                    "Cannot navigate into {} at path '{}'",
                    value_kind(other),
                    parts[..i].join(".")
                )));
            }
        };
    }

    Ok(current)
}
