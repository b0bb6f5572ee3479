use std::{
    fmt,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the Hearth engine.
///
/// This enum represents every failure that can escape the load pipeline:
/// reading source documents, parsing YAML and coercing raw values into
/// typed settings. Failures at the edges (missing files, unknown actions)
/// are absorbed and logged instead of being reported here.
#[derive(Error, Debug)]
pub enum HearthError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// Configuration field holds a value that cannot be coerced to its type
    #[error("invalid config field '{field}' in {component}: {reason}")]
    InvalidConfigField {
        /// The field that is invalid
        field: String,
        /// Component containing the field
        component: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// YAML parsing error with location context
    #[error("failed to parse YAML at '{location}': {details}")]
    YamlParseError {
        /// Location of YAML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for Hearth operations.
pub type Result<T> = result::Result<T, HearthError>;

impl HearthError {
    /// Creates a YAML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn yaml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        HearthError::YamlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an invalid field error for a typed settings component.
    ///
    /// # Arguments
    ///
    /// * `component` - Settings section the field belongs to (e.g. "monitoring")
    /// * `field` - Name of the offending field
    /// * `reason` - Why the raw value was rejected
    pub fn invalid_field(component: &str, field: &str, reason: impl fmt::Display) -> Self {
        HearthError::InvalidConfigField {
            field: field.to_string(),
            component: component.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an I/O error carrying the path that failed.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        HearthError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_names_component_and_field() {
        let err = HearthError::invalid_field("monitoring", "threshold_high", "not a number");

        assert_eq!(
            err.to_string(),
            "invalid config field 'threshold_high' in monitoring: not a number"
        );
    }

    #[test]
    fn yaml_parse_without_path_uses_string_location() {
        let err = HearthError::yaml_parse("bad indent", None);

        assert_eq!(err.to_string(), "failed to parse YAML at 'string': bad indent");
    }

    #[test]
    fn io_error_carries_the_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = HearthError::io(source, Path::new("/etc/hearth/config.yml"));

        assert!(matches!(
            err,
            HearthError::IoError { ref path, .. } if path == Path::new("/etc/hearth/config.yml")
        ));
        assert_eq!(err.to_string(), "I/O error on '/etc/hearth/config.yml': denied");
    }
}
