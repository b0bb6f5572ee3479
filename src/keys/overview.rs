use indexmap::IndexMap;
use serde::Serialize;

use crate::config::Settings;

/// One line of the keybinding overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingLine {
    /// Chord with `$mod` substituted, joined with ` + `.
    pub keys: String,
    /// Binding label.
    pub name: String,
}

/// Bindings sharing a display group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingGroup {
    /// Group label from the binding documents.
    pub group: String,
    /// Bindings in declaration order.
    pub bindings: Vec<BindingLine>,
}

/// Groups the configured bindings by their display group.
///
/// Groups appear in the order they are first used. Bindings with unknown
/// actions are listed too; the overview documents the configuration.
pub fn keybinding_overview(settings: &Settings) -> Vec<BindingGroup> {
    let modkey = &settings.environment.modkey;
    let mut groups: IndexMap<&str, Vec<BindingLine>> = IndexMap::new();

    for binding in &settings.keybindings {
        groups
            .entry(binding.group.as_str())
            .or_default()
            .push(BindingLine {
                keys: binding.chord(modkey).join(" + "),
                name: binding.name.clone(),
            });
    }

    groups
        .into_iter()
        .map(|(group, bindings)| BindingGroup {
            group: group.to_string(),
            bindings,
        })
        .collect()
}

/// Renders the overview with aligned key columns.
///
/// `header` styles each group label, e.g. `str::to_string` for plain text.
pub fn render_overview(groups: &[BindingGroup], header: impl Fn(&str) -> String) -> String {
    let width = groups
        .iter()
        .flat_map(|g| &g.bindings)
        .map(|b| b.keys.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for group in groups {
        out.push_str(&header(&group.group));
        out.push('\n');
        for line in &group.bindings {
            out.push_str(&format!("  {:<width$}  {}\n", line.keys, line.name));
        }
        out.push('\n');
    }
    out
}
