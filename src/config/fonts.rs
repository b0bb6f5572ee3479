use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::Mapping;

use super::RawSection;
use crate::Result;

/// Font families and sizes by role.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Fonts {
    /// Default bar font.
    pub font: String,
    /// Regular weight.
    pub font_regular: String,
    /// Light weight.
    pub font_light: String,
    /// Emphasised text.
    pub font_strong: String,
    /// Emphasised bold text.
    pub font_strong_bold: String,
    /// Default font size in points.
    pub font_size: u32,
    /// Icon font.
    pub font_icon: String,
    /// Icon font size.
    pub font_icon_size: u32,
    /// Font used for powerline arrows.
    pub font_arrow: String,
    /// Arrow font size.
    pub font_arrow_size: u32,
    /// Notification daemon font.
    pub font_notification: String,
    /// Notification font size.
    pub font_notification_size: u32,
    /// Rofi menu font.
    pub rofi_font: String,
    /// Rofi menu font size.
    pub rofi_font_size: u32,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            font: "Fira Code Nerd Font Bold".to_string(),
            font_regular: "Fira Code Nerd Font Medium".to_string(),
            font_light: "Fira Code Nerd Font Light".to_string(),
            font_strong: "Fira Code Nerd Font Semibold".to_string(),
            font_strong_bold: "Fira Code Nerd Font Bold".to_string(),
            font_size: 14,
            font_icon: "Fira Code Nerd Font Medium".to_string(),
            font_icon_size: 16,
            font_arrow: "Fira Code Nerd Font".to_string(),
            font_arrow_size: 30,
            font_notification: "Fira Code Nerd Font".to_string(),
            font_notification_size: 11,
            rofi_font: "Fira Code Nerd Font Medium".to_string(),
            rofi_font_size: 12,
        }
    }
}

impl Fonts {
    /// Builds the section from its raw payload, defaulting missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if a size is not a number.
    pub fn from_raw(map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("fonts", map);
        let d = Self::default();

        Ok(Self {
            font: raw.string("font", &d.font)?,
            font_regular: raw.string("font_regular", &d.font_regular)?,
            font_light: raw.string("font_light", &d.font_light)?,
            font_strong: raw.string("font_strong", &d.font_strong)?,
            font_strong_bold: raw.string("font_strong_bold", &d.font_strong_bold)?,
            font_size: raw.number("font_size", d.font_size)?,
            font_icon: raw.string("font_icon", &d.font_icon)?,
            font_icon_size: raw.number("font_icon_size", d.font_icon_size)?,
            font_arrow: raw.string("font_arrow", &d.font_arrow)?,
            font_arrow_size: raw.number("font_arrow_size", d.font_arrow_size)?,
            font_notification: raw.string("font_notification", &d.font_notification)?,
            font_notification_size: raw
                .number("font_notification_size", d.font_notification_size)?,
            rofi_font: raw.string("rofi_font", &d.rofi_font)?,
            rofi_font_size: raw.number("rofi_font_size", d.rofi_font_size)?,
        })
    }

    /// Rofi font descriptor, e.g. `"Fira Code 12"`.
    pub fn rofi_descriptor(&self) -> String {
        format!("{} {}", self.rofi_font, self.rofi_font_size)
    }

    /// Notification font descriptor.
    pub fn notification_descriptor(&self) -> String {
        format!("{} {}", self.font_notification, self.font_notification_size)
    }
}
