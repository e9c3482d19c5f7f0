use std::sync::LazyLock;

use super::normalize::normalize_text;
use super::patterns::{first_capture, PatternRule};
use super::types::ADDRESS_UNAVAILABLE;

/// Labelled forms, then street-shaped heuristics.
static STREET_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        PatternRule::labeled(r"(?i)address\s*[:：-]\s*([^,.\n]+)", "address: label").unwrap(),
        // 주소 = address
        PatternRule::labeled(r"(?i)주소\s*[:：-]\s*([^,.\n]+)", "주소: label").unwrap(),
        PatternRule::labeled(r"(?i)location\s*[:：-]\s*([^,.\n]+)", "location: label").unwrap(),
        PatternRule::labeled(
            r"(?i)(?:street|road|ave|avenue)\s*[:：-]\s*([^,.\n]+)",
            "street-type label",
        )
        .unwrap(),
        PatternRule::bare(
            r"(?i)\d+\s+[A-Za-z\s]+(?:street|road|ave|avenue)",
            "house number + street",
        )
        .unwrap(),
        PatternRule::bare(
            r"(?i)\b\d{1,5}\s+[A-Za-z\s]+(?:street|road|ave|avenue|st|rd)",
            "house number + abbreviated street",
        )
        .unwrap(),
        PatternRule::bare(
            r"(?i)[A-Za-z0-9\s]+(?:street|road|ave|avenue|st|rd|lane|way)[,\s]+[A-Za-z\s]+[,\s]+[A-Z]{2}\s+\d{5}",
            "street, city, state zip",
        )
        .unwrap(),
    ]
});

/// Last resort: anything that looks like part of a location.
static LOCATION_HINTS: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        PatternRule::bare(r"(?i)\b\d{1,5}\s+[A-Za-z\s]+\b", "number + words").unwrap(),
        PatternRule::bare(
            r"(?i)[A-Za-z]+\s+(?:Building|Complex|Plaza|Tower)",
            "building name",
        )
        .unwrap(),
        PatternRule::bare(r"(?i)(?:Apt|Suite|Unit|Room)\s*[#]?\s*\d+", "unit marker").unwrap(),
    ]
});

/// Extract an address, or [`ADDRESS_UNAVAILABLE`] when every tier misses.
pub fn extract_address(text: &str) -> String {
    let hit = first_capture(&STREET_RULES, text).or_else(|| first_capture(&LOCATION_HINTS, text));
    match hit {
        Some((rule, value)) => {
            tracing::debug!(field = "address", pattern = rule.description, value, "Pattern matched");
            normalize_text(value)
        }
        None => {
            tracing::debug!(field = "address", "No pattern matched");
            ADDRESS_UNAVAILABLE.to_string()
        }
    }
}
