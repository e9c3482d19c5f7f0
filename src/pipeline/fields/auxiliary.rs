use std::sync::LazyLock;

use regex::Regex;

static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}[-/]\d{1,2}[-/]\d{1,2}\b").unwrap());
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w\.-]+@[\w\.-]+\.\w+\b").unwrap());

/// Notes on incidental data: the first date, then the first email.
///
/// Returns `None` when neither is present, so the caller can omit the
/// `Additional Information` field entirely.
pub fn extract_additional_info(text: &str) -> Option<String> {
    let mut notes = Vec::with_capacity(2);
    if let Some(date) = DATE.find(text) {
        notes.push(format!("Date found: {}", date.as_str()));
    }
    if let Some(email) = EMAIL.find(text) {
        notes.push(format!("Email found: {}", email.as_str()));
    }
    if notes.is_empty() {
        None
    } else {
        Some(notes.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_before_email_regardless_of_position() {
        assert_eq!(
            extract_additional_info("mail a@b.com on 2023-5-1").as_deref(),
            Some("Date found: 2023-5-1; Email found: a@b.com")
        );
    }

    #[test]
    fn slash_dates_accepted() {
        assert_eq!(
            extract_additional_info("issued 2024/12/31").as_deref(),
            Some("Date found: 2024/12/31")
        );
    }

    #[test]
    fn only_first_match_kept() {
        assert_eq!(
            extract_additional_info("x@y.org and z@w.net").as_deref(),
            Some("Email found: x@y.org")
        );
    }

    #[test]
    fn nothing_incidental() {
        assert_eq!(extract_additional_info("just words 12-3"), None);
    }
}
