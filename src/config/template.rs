//! `$variable` substitution for path and shell command templates.
//!
//! Substitution is tolerant: a placeholder with no matching variable is
//! left in the output untouched, so a template can be resolved in several
//! passes (directory roots first, call-site values later).

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

use super::PathContext;

/// Named values available to a template.
pub type Variables = IndexMap<String, String>;

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})")
        .expect("placeholder pattern is a valid regex")
});

/// Replaces every known `$name` or `${name}` in `template`.
///
/// `$$` collapses to a literal `$`. Unknown names are kept verbatim.
pub fn substitute(template: &str, variables: &Variables) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }

            let name = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());

            variables
                .get(name)
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Resolves a template against the builtin directory variables plus `extra`.
///
/// Caller-supplied variables take precedence over builtins with the same
/// name. The result is trimmed.
///
/// # Examples
///
/// ```
/// use hearth::config::{PathContext, template::{resolve, Variables}};
///
/// let ctx = PathContext::with_home("/u");
/// assert_eq!(resolve(&ctx, "$home/x", &Variables::new()), "/u/x");
/// assert_eq!(resolve(&ctx, "$unknown/x", &Variables::new()), "$unknown/x");
/// ```
pub fn resolve(ctx: &PathContext, template: &str, extra: &Variables) -> String {
    let mut variables = ctx.variables();
    variables.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));

    substitute(template, &variables).trim().to_string()
}

/// Resolves only the builtin directory variables.
pub fn resolve_path(ctx: &PathContext, template: &str) -> String {
    resolve(ctx, template, &Variables::new())
}

/// Builds a shell command from a template in two passes.
///
/// Directory variables are resolved first, then `values` supplied by the
/// call site (volume levels, file names and the like).
pub fn build_shell_command(ctx: &PathContext, raw: &str, values: &Variables) -> String {
    substitute(&resolve_path(ctx, raw), values).trim().to_string()
}
