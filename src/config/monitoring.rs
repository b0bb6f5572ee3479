use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::Mapping;
use tracing::warn;

use super::{Colors, RawSection};
use crate::Result;

/// Sensor severity derived from a reading and the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Below the medium threshold.
    Normal,
    /// At or above the medium threshold.
    Medium,
    /// At or above the high threshold.
    High,
}

/// Colors and thresholds used to tint sensor readouts.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Monitoring {
    /// Palette name used below the medium threshold.
    pub default_color: String,
    /// Palette name used from the medium threshold.
    pub medium_color: String,
    /// Palette name used from the high threshold.
    pub high_color: String,
    /// Medium threshold, in percent.
    pub threshold_medium: u32,
    /// High threshold, in percent.
    pub threshold_high: u32,
    /// Whether readouts above the high threshold blink.
    pub burn: bool,
}

impl Default for Monitoring {
    fn default() -> Self {
        Self {
            default_color: "fg_normal".to_string(),
            medium_color: "fg_yellow".to_string(),
            high_color: "fg_orange".to_string(),
            threshold_medium: 75,
            threshold_high: 90,
            burn: false,
        }
    }
}

impl Monitoring {
    /// Builds the section from its raw payload, defaulting missing fields.
    ///
    /// `burn` is on only for the literal text `yes` (or a YAML `true`).
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold is not a number. A medium threshold
    /// above the high one is kept as configured and logged.
    pub fn from_raw(map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("monitoring", map);
        let d = Self::default();

        let monitoring = Self {
            default_color: raw.string("default_color", &d.default_color)?,
            medium_color: raw.string("medium_color", &d.medium_color)?,
            high_color: raw.string("high_color", &d.high_color)?,
            threshold_medium: raw.number("threshold_medium", d.threshold_medium)?,
            threshold_high: raw.number("threshold_high", d.threshold_high)?,
            burn: raw.flag("burn", "yes", d.burn)?,
        };

        if monitoring.threshold_medium > monitoring.threshold_high {
            warn!(
                threshold_medium = monitoring.threshold_medium,
                threshold_high = monitoring.threshold_high,
                "Monitoring medium threshold is above the high threshold"
            );
        }

        Ok(monitoring)
    }

    /// Classifies a reading against the thresholds.
    pub fn severity(&self, value: f64) -> Severity {
        if value >= f64::from(self.threshold_high) {
            Severity::High
        } else if value >= f64::from(self.threshold_medium) {
            Severity::Medium
        } else {
            Severity::Normal
        }
    }

    /// Color for a reading, resolved through the palette.
    pub fn color_for<'a>(&'a self, colors: &'a Colors, value: f64) -> &'a str {
        let name = match self.severity(value) {
            Severity::High => &self.high_color,
            Severity::Medium => &self.medium_color,
            Severity::Normal => &self.default_color,
        };
        colors.get_color(name)
    }
}
