use std::sync::LazyLock;

use super::normalize::normalize_text;
use super::patterns::{first_capture, PatternRule};
use super::types::NOT_FOUND;

/// Labelled English/Korean forms first, then unlabelled heuristics.
/// Case-sensitive: the Western heuristic relies on capitalization.
static NAME_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        PatternRule::labeled(r"name\s*[:：-]\s*([^,.\n]+)", "name: label").unwrap(),
        // 성명 = full name
        PatternRule::labeled(r"성명\s*[:：-]\s*([^,.\n]+)", "성명: label").unwrap(),
        // 이름 = name
        PatternRule::labeled(r"이름\s*[:：-]\s*([^,.\n]+)", "이름: label").unwrap(),
        PatternRule::bare(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b", "Western given + family name").unwrap(),
        PatternRule::bare(r"[가-힣]+\s*[가-힣]+", "Hangul run").unwrap(),
    ]
});

/// Extract a person name, or [`NOT_FOUND`].
pub fn extract_name(text: &str) -> String {
    match first_capture(&NAME_RULES, text) {
        Some((rule, value)) => {
            tracing::debug!(field = "name", pattern = rule.description, value, "Pattern matched");
            normalize_text(value)
        }
        None => {
            tracing::debug!(field = "name", "No pattern matched");
            NOT_FOUND.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_english_name() {
        assert_eq!(extract_name("name: John Smith, phone: 010"), "John Smith");
    }

    #[test]
    fn labeled_korean_name() {
        assert_eq!(extract_name("성명: 홍길동, 주소: 서울"), "홍길동");
        assert_eq!(extract_name("이름-김철수"), "김철수");
    }

    #[test]
    fn label_is_case_sensitive() {
        // "Name" does not satisfy the lowercase label, so the Western heuristic
        // finds the capitalized pair instead.
        assert_eq!(extract_name("Name: jane doe. Contact Person"), "Contact Person");
    }

    #[test]
    fn western_heuristic() {
        assert_eq!(extract_name("please call Mary Jones tomorrow"), "Mary Jones");
    }

    #[test]
    fn hangul_heuristic() {
        assert_eq!(extract_name("담당자 박영희 010"), "담당자 박영희");
    }

    #[test]
    fn blank_labeled_capture_falls_through() {
        assert_eq!(extract_name("name: , see Anna Lee"), "Anna Lee");
    }

    #[test]
    fn nothing_recognizable() {
        assert_eq!(extract_name("lorem ipsum 123"), NOT_FOUND);
        assert_eq!(extract_name(""), NOT_FOUND);
    }
}
