use std::sync::LazyLock;

use regex::Regex;

/// Runs of whitespace or full-width colons.
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[：\s]+").unwrap());
static COLON_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*:\s*").unwrap());
static HYPHEN_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-\s*").unwrap());

/// Canonicalize separators before pattern matching.
///
/// Collapses whitespace (newlines included) and full-width colons into single
/// spaces, rewrites `label : value` to `label: value`, glues hyphens to both
/// neighbours, then trims. Idempotent.
pub fn normalize_text(text: &str) -> String {
    let collapsed = SEPARATOR_RUN.replace_all(text, " ");
    let colons = COLON_SPACING.replace_all(&collapsed, ": ");
    let hyphens = HYPHEN_SPACING.replace_all(&colons, "-");
    hyphens.trim().to_string()
}
