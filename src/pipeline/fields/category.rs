use std::sync::LazyLock;

use regex::Regex;

use super::patterns::{FieldPatterns, PatternRule};
use super::types::NOT_FOUND;

/// "type" plus Korean 종류 (kind), 유형 (type), 분류 (classification).
const TYPE_LABELS: &[&str] = &["type", "종류", "유형", "분류"];

static TYPE_PATTERNS: LazyLock<FieldPatterns> = LazyLock::new(|| {
    let extra = vec![
        PatternRule::labeled(r"(?i)type\s*[:：-]\s*([^,.\n]+)", "type: label").unwrap(),
        PatternRule::labeled(r"(?i)종류\s*[:：-]\s*([^,.\n]+)", "종류: label").unwrap(),
        PatternRule::labeled(r"(?i)유형\s*[:：-]\s*([^,.\n]+)", "유형: label").unwrap(),
        PatternRule::labeled(r"(?i)분류\s*[:：-]\s*([^,.\n]+)", "분류: label").unwrap(),
    ];
    FieldPatterns::new(TYPE_LABELS, extra).unwrap()
});

static CATEGORY_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:document|certificate|license|permit|card|ID)\b").unwrap()
});

/// Extract the kind of document or information, or [`NOT_FOUND`].
///
/// Labelled values win; otherwise the first category keyword in the text is
/// returned capitalized (`ID` becomes `Id`).
pub fn extract_type(text: &str) -> String {
    if let Some(value) = TYPE_PATTERNS.extract(text) {
        return value;
    }
    match CATEGORY_KEYWORDS.find(text) {
        Some(keyword) => {
            let value = capitalize(keyword.as_str());
            tracing::debug!(field = "type", value = %value, "Category keyword matched");
            value
        }
        None => NOT_FOUND.to_string(),
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
