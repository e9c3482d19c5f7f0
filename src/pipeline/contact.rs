//! Defaulting and display formatting for manually submitted contact details.

use serde::{Deserialize, Serialize};

use super::fields::{extract_address, ADDRESS_UNAVAILABLE, NOT_FOUND};

/// Which contact field a value belongs to; selects its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Address,
    Type,
}

impl ContactField {
    fn default_value(&self) -> &'static str {
        match self {
            ContactField::Name => "Unknown",
            ContactField::Phone => "No phone number",
            ContactField::Address => "Address pending verification",
            ContactField::Type => "General Contact",
        }
    }
}

/// Contact details submitted separately from the image pipeline.
///
/// Missing JSON keys deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ContactRecord {
    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            kind: self.kind.trim().to_string(),
        }
    }
}

/// Substitute the field's default when `value` is empty or [`NOT_FOUND`].
///
/// Known quirk: a missing address is first run back through the document-level
/// address extractor. The input at this point is empty or the sentinel, so the
/// extractor practically always misses and the default is used.
pub fn validate_contact_value(value: &str, field: ContactField) -> String {
    if !value.is_empty() && value != NOT_FOUND {
        return value.to_string();
    }
    if field == ContactField::Address {
        let extracted = extract_address(value);
        if extracted != ADDRESS_UNAVAILABLE {
            return extracted;
        }
    }
    field.default_value().to_string()
}

/// Validate all four fields and render them one per line.
pub fn format_contact(record: &ContactRecord) -> String {
    let lines = [
        ("Name", validate_contact_value(&record.name, ContactField::Name)),
        ("Phone", validate_contact_value(&record.phone, ContactField::Phone)),
        ("Address", validate_contact_value(&record.address, ContactField::Address)),
        ("Type", validate_contact_value(&record.kind, ContactField::Type)),
    ];
    lines
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
