use serde_yaml::Mapping;

use crate::{
    Result,
    config::{PathContext, Settings, loading::SourceFiles, preload_colors},
};

/// Settings loaded once for a CLI invocation.
///
/// Keeps the merged raw tree next to the typed settings so commands can
/// show exactly what the source documents declared.
#[derive(Debug, Clone)]
pub struct Session {
    /// Typed settings with the declared theme applied.
    pub settings: Settings,

    /// Merged source documents.
    pub raw: Mapping,
}

impl Session {
    /// Loads the sources, builds the settings and applies the declared theme.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a section holds a
    /// value that cannot be coerced.
    pub fn load(ctx: &PathContext, files: SourceFiles) -> Result<Self> {
        let raw = Settings::load_raw(ctx, files)?;
        let mut settings = Settings::from_raw(ctx, &raw)?;
        preload_colors(ctx, &mut settings);

        Ok(Self { settings, raw })
    }

    /// Wraps an already built tree.
    ///
    /// # Errors
    ///
    /// Returns an error if a section holds a value that cannot be coerced.
    pub fn from_raw(ctx: &PathContext, raw: Mapping) -> Result<Self> {
        let settings = Settings::from_raw(ctx, &raw)?;
        Ok(Self { settings, raw })
    }
}
