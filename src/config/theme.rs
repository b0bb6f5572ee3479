//! Theme overlays for the color palette.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::{info, instrument, warn};

use super::{
    Colors, PathContext, Settings,
    loading::{merging::merge, read_yaml_file, value_kind},
    template::resolve_path,
};
use crate::{HearthError, Result};

/// Merges a theme document's `colors` into the settings' palette.
///
/// `theme_ref` is a path template such as `$theme/nord.yml`. A theme that
/// is missing, unreadable or has no `colors` mapping leaves the settings
/// untouched and logs a warning. Applying the same theme twice yields the
/// same palette as applying it once.
#[instrument(skip(ctx, settings))]
pub fn apply_theme<'a>(
    ctx: &PathContext,
    theme_ref: &str,
    settings: &'a mut Settings,
) -> &'a mut Settings {
    let path = PathBuf::from(resolve_path(ctx, theme_ref));

    if !path.exists() {
        warn!("Not found the selected theme {}.", path.display());
        return settings;
    }

    match overlay_colors(&path, &settings.colors) {
        Ok(mut colors) => {
            colors.theme = Some(theme_ref.to_string());
            settings.colors = colors;
            info!(theme = %path.display(), "Theme applied");
        }
        Err(e) => {
            warn!("error while trying to apply selected theme: {e}");
        }
    }

    settings
}

/// Applies the theme named by the colors document, if any.
pub fn preload_colors<'a>(ctx: &PathContext, settings: &'a mut Settings) -> &'a mut Settings {
    match settings.colors.theme.clone() {
        Some(theme) => apply_theme(ctx, &theme, settings),
        None => settings,
    }
}

fn overlay_colors(path: &Path, current: &Colors) -> Result<Colors> {
    let document = read_yaml_file(path)?;

    let overrides = match document.get("colors") {
        Some(Value::Mapping(colors)) => colors.clone(),
        Some(other) => {
            return Err(HearthError::ConfigValidation {
                component: path.display().to_string(),
                details: format!("expected 'colors' to be a mapping, found {}", value_kind(other)),
            });
        }
        None => {
            return Err(HearthError::ConfigValidation {
                component: path.display().to_string(),
                details: "missing 'colors' mapping".to_string(),
            });
        }
    };

    let mut raw: Mapping = current.raw().clone();
    merge(&mut raw, overrides);
    Colors::from_raw(&raw)
}
