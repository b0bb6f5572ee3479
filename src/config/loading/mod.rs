/// Deep merge of YAML mappings.
pub mod merging;

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_yaml::{Mapping, Value};
use tracing::{debug, instrument, warn};

use super::PathContext;
use crate::{HearthError, Result};
use merging::merge;

/// File extension of every layered source document.
pub const SOURCE_EXTENSION: &str = "yml";

/// The layered source documents that make up one settings load.
///
/// Each entry is optional. Absent entries contribute nothing to the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFiles {
    /// Main configuration, highest precedence.
    pub config: Option<PathBuf>,
    /// Color palette, lowest precedence.
    pub colors: Option<PathBuf>,
    /// Application icons and related metadata.
    pub applications: Option<PathBuf>,
    /// Declarative keybindings.
    pub keybindings: Option<PathBuf>,
}

impl SourceFiles {
    /// Locates every logical source under the context's configuration root.
    pub fn discover(ctx: &PathContext) -> Self {
        Self::default().fill_missing(ctx)
    }

    /// Locates only the sources that were not set explicitly.
    pub fn fill_missing(self, ctx: &PathContext) -> Self {
        Self {
            config: self.config.or_else(|| locate_source(ctx, "config")),
            colors: self.colors.or_else(|| locate_source(ctx, "colors")),
            applications: self
                .applications
                .or_else(|| locate_source(ctx, "applications")),
            keybindings: self
                .keybindings
                .or_else(|| locate_source(ctx, "keybindings")),
        }
    }

    /// Sources in merge order: colors, applications, keybindings, config.
    pub fn ordered(&self) -> [Option<PathBuf>; 4] {
        [
            self.colors.clone(),
            self.applications.clone(),
            self.keybindings.clone(),
            self.config.clone(),
        ]
    }
}

/// Picks the file backing a logical source name.
///
/// Prefers `<name>.yml` in the configuration root, then `<name>_default.yml`
/// (with a warning), and otherwise reports the source as absent.
pub fn locate_source(ctx: &PathContext, name: &str) -> Option<PathBuf> {
    let config_file = ctx
        .config_home()
        .join(format!("{name}.{SOURCE_EXTENSION}"));
    if config_file.exists() {
        return Some(config_file);
    }

    let default_file = ctx
        .config_home()
        .join(format!("{name}_default.{SOURCE_EXTENSION}"));
    if default_file.exists() {
        warn!(
            "There is no file {}, so the file {} will be used.",
            config_file.display(),
            default_file.display()
        );
        return Some(default_file);
    }

    debug!(source = name, "no source file found");
    None
}

/// Loads and merges layered documents in the given order.
///
/// Later paths override earlier ones. `None` entries and files that have
/// disappeared are skipped. A document that fails to parse, or whose top
/// level is not a mapping, is skipped with a warning so the remaining
/// layers still load.
///
/// # Errors
///
/// Returns `HearthError::IoError` if a present file cannot be read.
#[instrument(skip_all)]
pub fn load(paths: &[Option<PathBuf>]) -> Result<Mapping> {
    let mut merged = Mapping::new();

    for path in paths.iter().flatten() {
        if !path.exists() {
            warn!("Source file {} does not exist, skipping", path.display());
            continue;
        }

        match read_yaml_file(path) {
            Ok(document) => {
                debug!(path = %path.display(), keys = document.len(), "merging source");
                merge(&mut merged, document);
            }
            Err(e @ (HearthError::YamlParseError { .. } | HearthError::ConfigValidation { .. })) => {
                warn!("Skipping source {}: {e}", path.display());
            }
            Err(e) => return Err(e),
        }
    }

    Ok(merged)
}

/// Reads one YAML document whose top level must be a mapping.
///
/// An empty document reads as an empty mapping.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, or its
/// top level is not a mapping.
pub fn read_yaml_file(path: &Path) -> Result<Mapping> {
    let content = fs::read_to_string(path).map_err(|e| HearthError::io(e, path))?;
    parse_document(&content, Some(path))
}

/// Parses YAML text into a top-level mapping.
///
/// # Errors
///
/// Returns an error if the text is not valid YAML or is not a mapping.
pub fn parse_document(content: &str, path: Option<&Path>) -> Result<Mapping> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| HearthError::yaml_parse(e, path))?;

    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(HearthError::ConfigValidation {
            component: path.map_or_else(|| "string".to_string(), |p| p.display().to_string()),
            details: format!(
                "expected a mapping at the top level, found {}",
                value_kind(&other)
            ),
        }),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
