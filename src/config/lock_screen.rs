use schemars::JsonSchema;
use serde::Serialize;
use serde_yaml::Mapping;

use super::{PathContext, RawSection, template::resolve_path};
use crate::Result;

/// Lock screen command, fonts and joke sources.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct LockScreen {
    /// Command run by the `lock_screen` action.
    pub command: String,
    /// Idle minutes before locking.
    pub timeout: u32,
    /// Clock font.
    pub font: String,
    /// Clock font size.
    pub font_size: u32,
    /// Font file used to draw the quote.
    pub quote_font_path: String,
    /// Quote font size.
    pub quote_font_size: u32,
    /// Joke providers in the order they are tried.
    pub joke_providers: Vec<String>,
    /// Quote box color.
    pub quote_foreground_color: String,
    /// Quote text color.
    pub quote_text_color: String,
    /// Endpoint of the icanhazdadjoke provider.
    pub icanhazdad_joke_url: String,
    /// Endpoint of the reddit provider.
    pub reddit_joke_url: String,
    /// Blur passed to the image compositor, e.g. `0x5`.
    pub blurtype: String,
}

impl Default for LockScreen {
    fn default() -> Self {
        Self {
            command: String::new(),
            timeout: 10,
            font: String::new(),
            font_size: 17,
            quote_font_path: String::new(),
            quote_font_size: 17,
            joke_providers: vec!["reddit".to_string()],
            quote_foreground_color: "#fff".to_string(),
            quote_text_color: "#000".to_string(),
            icanhazdad_joke_url: String::new(),
            reddit_joke_url: "https://www.reddit.com/r/ProgrammerDadJokes.json".to_string(),
            blurtype: "0x5".to_string(),
        }
    }
}

impl LockScreen {
    /// Builds the section from its raw payload, defaulting missing fields.
    ///
    /// `joke_providers` may be a sequence or comma-separated text.
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout or font size is not a number.
    pub fn from_raw(ctx: &PathContext, map: &Mapping) -> Result<Self> {
        let raw = RawSection::new("lock_screen", map);
        let d = Self::default();
        let default_providers: Vec<&str> = d.joke_providers.iter().map(String::as_str).collect();

        Ok(Self {
            command: raw.string("command", &d.command)?,
            timeout: raw.number("timeout", d.timeout)?,
            font: raw.string("font", &d.font)?,
            font_size: raw.number("font_size", d.font_size)?,
            quote_font_path: resolve_path(ctx, &raw.string("quote_font_path", &d.quote_font_path)?),
            quote_font_size: raw.number("quote_font_size", d.quote_font_size)?,
            joke_providers: raw.list("joke_providers", ',', &default_providers)?,
            quote_foreground_color: raw
                .string("quote_foreground_color", &d.quote_foreground_color)?,
            quote_text_color: raw.string("quote_text_color", &d.quote_text_color)?,
            icanhazdad_joke_url: raw.string("icanhazdad_joke_url", &d.icanhazdad_joke_url)?,
            reddit_joke_url: raw.string("reddit_joke_url", &d.reddit_joke_url)?,
            blurtype: raw.string("blurtype", &d.blurtype)?,
        })
    }

    /// The lock command with a leading `~` expanded to the home directory.
    pub fn expanded_command(&self, ctx: &PathContext) -> String {
        expand_tilde(ctx, &self.command)
    }
}

/// Expands a leading `~` or `~/` to the context's home directory.
pub fn expand_tilde(ctx: &PathContext, text: &str) -> String {
    let home = ctx.home().to_string_lossy();

    if text == "~" {
        home.into_owned()
    } else if let Some(rest) = text.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else {
        text.to_string()
    }
}
