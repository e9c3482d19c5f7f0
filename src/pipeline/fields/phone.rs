use std::sync::LazyLock;

use super::patterns::PatternRule;
use super::types::NOT_FOUND;

/// Fewest digits accepted as a phone number.
const MIN_PHONE_DIGITS: usize = 10;

static PHONE_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        PatternRule::labeled(r"phone\s*[:：-]\s*(\d[\d\s\-\.]+\d)", "phone: label").unwrap(),
        // 전화 = telephone
        PatternRule::labeled(r"전화\s*[:：-]\s*(\d[\d\s\-\.]+\d)", "전화: label").unwrap(),
        // 연락처 = contact
        PatternRule::labeled(r"연락처\s*[:：-]\s*(\d[\d\s\-\.]+\d)", "연락처: label").unwrap(),
        PatternRule::bare(r"\b\d{2,4}[-.\s]?\d{3,4}[-.\s]?\d{4}\b", "grouped digits").unwrap(),
        PatternRule::bare(r"\b\d{10,11}\b", "contiguous digits").unwrap(),
    ]
});

/// Extract a phone number formatted as `XXX-XXXX-REST`, or [`NOT_FOUND`].
///
/// A rule whose match holds fewer than ten digits does not count as a hit;
/// the next rule is tried.
pub fn extract_phone(text: &str) -> String {
    for rule in PHONE_RULES.iter() {
        let Some(raw) = rule.capture(text) else {
            continue;
        };
        match format_phone_digits(raw) {
            Some(phone) => {
                tracing::debug!(field = "phone", pattern = rule.description, value = %phone, "Pattern matched");
                return phone;
            }
            None => {
                tracing::debug!(field = "phone", pattern = rule.description, raw, "Too few digits, trying next pattern");
            }
        }
    }
    tracing::debug!(field = "phone", "No pattern matched");
    NOT_FOUND.to_string()
}

/// Strip separators and split into 3 / 4 / remaining digits.
///
/// Numbers longer than eleven digits keep the same split, leaving a long
/// trailing group.
pub fn format_phone_digits(raw: &str) -> Option<String> {
    let digits: Vec<char> = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '.')
        .collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return None;
    }
    let head: String = digits[..3].iter().collect();
    let middle: String = digits[3..7].iter().collect();
    let rest: String = digits[7..].iter().collect();
    Some(format!("{head}-{middle}-{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_eleven_digits() {
        assert_eq!(extract_phone("01012345678"), "010-1234-5678");
    }

    #[test]
    fn formats_ten_digits_with_short_tail() {
        assert_eq!(extract_phone("0212345678"), "021-2345-678");
    }

    #[test]
    fn labeled_phone_with_separators() {
        assert_eq!(extract_phone("phone: 010.1234.5678, email"), "010-1234-5678");
        assert_eq!(extract_phone("전화: 02 123 45678"), "021-2345-678");
        assert_eq!(extract_phone("연락처-010-9876-5432"), "010-9876-5432");
    }

    #[test]
    fn grouped_digits_without_label() {
        assert_eq!(extract_phone("call 010-1234-5678 now"), "010-1234-5678");
    }

    #[test]
    fn too_few_digits_falls_through() {
        // The labelled capture has 8 digits; the bare rule still finds the real number.
        assert_eq!(
            extract_phone("phone: 1234-5678 or 01055556666"),
            "010-5555-6666"
        );
    }

    #[test]
    fn too_few_digits_anywhere() {
        assert_eq!(extract_phone("phone: 123-4567"), NOT_FOUND);
    }

    #[test]
    fn long_numbers_keep_three_four_rest_split() {
        assert_eq!(
            format_phone_digits("0101234567890").as_deref(),
            Some("010-1234-567890")
        );
    }

    #[test]
    fn no_digits() {
        assert_eq!(extract_phone("no number here"), NOT_FOUND);
    }
}
