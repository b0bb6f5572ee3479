//! Formatting utilities for CLI output.
//!
//! ANSI styling for headers, names and errors, plus compact rendering of
//! raw YAML values.

use serde_yaml::Value;

/// ANSI escape codes for terminal output
pub struct Ansi;

impl Ansi {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Ansi::BOLD, Ansi::CYAN, text, Ansi::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!("{}{}{}{}", Ansi::BOLD, Ansi::YELLOW, text, Ansi::RESET)
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Ansi::BOLD, Ansi::GREEN, text, Ansi::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Ansi::BOLD, Ansi::BLUE, text, Ansi::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Ansi::DIM, text, Ansi::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Ansi::BOLD, Ansi::RED, text, Ansi::RESET)
}

/// Formats a raw YAML value for one-line CLI output.
///
/// Scalars print as written (strings quoted); collections show their size.
///
/// # Examples
///
/// ```
/// use hearth::cli::formatting::format_yaml_value;
/// use serde_yaml::Value;
///
/// assert_eq!(format_yaml_value(&Value::from("mod4")), "\"mod4\"");
/// assert_eq!(format_yaml_value(&Value::from(60)), "60");
/// ```
pub fn format_yaml_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{s}\""),
        Value::Sequence(items) => format!("[{}]", items.len()),
        Value::Mapping(map) => format!("{{{}}}", map.len()),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, format_yaml_value(&tagged.value)),
    }
}
