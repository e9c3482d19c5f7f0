//! Ordered pattern tables shared by the field extractors.
//!
//! Every extractor is a list of [`PatternRule`]s tried in priority order;
//! the first rule whose capture is non-blank wins. Priority lives in the
//! table, not in branching code.

use regex::Regex;

/// Which part of a match becomes the field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// The first capture group (labelled `label: value` forms).
    Group(usize),
    /// The entire match (unlabelled heuristics).
    Whole,
}

/// A compiled pattern with its extraction rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub regex: Regex,
    pub capture: Capture,
    pub description: &'static str,
}

impl PatternRule {
    pub fn new(pattern: &str, capture: Capture, description: &'static str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            capture,
            description,
        })
    }

    /// Labelled rule: value is capture group 1.
    pub fn labeled(pattern: &str, description: &'static str) -> Result<Self, regex::Error> {
        Self::new(pattern, Capture::Group(1), description)
    }

    /// Heuristic rule: value is the whole match.
    pub fn bare(pattern: &str, description: &'static str) -> Result<Self, regex::Error> {
        Self::new(pattern, Capture::Whole, description)
    }

    /// Selected text of the leftmost match, if any.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        match self.capture {
            Capture::Whole => self.regex.find(text).map(|m| m.as_str()),
            Capture::Group(index) => self
                .regex
                .captures(text)
                .and_then(|caps| caps.get(index))
                .map(|m| m.as_str()),
        }
    }
}

/// First rule in `rules` producing a non-blank capture, with the trimmed value.
pub fn first_capture<'r, 't>(
    rules: &'r [PatternRule],
    text: &'t str,
) -> Option<(&'r PatternRule, &'t str)> {
    rules.iter().find_map(|rule| {
        let value = rule.capture(text)?.trim();
        (!value.is_empty()).then_some((rule, value))
    })
}

/// Label-driven extractor with graduated permissiveness.
///
/// For every synonym four variants are generated, from strict to loose:
/// `label: value`, label then a later separator, label then any trailing
/// text, and the same with the label matched as a whole word. All variants of
/// one synonym precede the next synonym; `extra` rules run last. Matching is
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    rules: Vec<PatternRule>,
}

impl FieldPatterns {
    pub fn new(labels: &[&str], extra: Vec<PatternRule>) -> Result<Self, regex::Error> {
        let mut rules = Vec::with_capacity(labels.len() * 4 + extra.len());
        for label in labels {
            let label = regex::escape(label);
            rules.push(PatternRule::labeled(
                &format!(r"(?i){label}\s*[:：-]\s*([^,.\n]+)"),
                "label: value",
            )?);
            rules.push(PatternRule::labeled(
                &format!(r"(?i){label}[^\n:：-]*[:：-]\s*([^,.\n]+)"),
                "label ... separator value",
            )?);
            rules.push(PatternRule::labeled(
                &format!(r"(?i){label}[^\n]*?([^,.\n]+)"),
                "label trailing text",
            )?);
            rules.push(PatternRule::labeled(
                &format!(r"(?i)\b{label}\b[^\n]*?([^,.\n]+)"),
                "whole-word label trailing text",
            )?);
        }
        rules.extend(extra);
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Trimmed value of the first matching rule.
    pub fn extract(&self, text: &str) -> Option<String> {
        match first_capture(&self.rules, text) {
            Some((rule, value)) => {
                tracing::debug!(pattern = rule.regex.as_str(), value, "Field pattern matched");
                Some(value.to_string())
            }
            None => {
                tracing::debug!("No match found for field patterns");
                None
            }
        }
    }
}
