use serde::{Deserialize, Serialize};

/// Value recorded for a field no pattern could extract.
pub const NOT_FOUND: &str = "Not found";

/// Address-specific miss value. Not equal to [`NOT_FOUND`], so the
/// dual-source merge never replaces it.
pub const ADDRESS_UNAVAILABLE: &str = "Address information unavailable";

/// Labels of the extracted fields, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldLabel {
    Name,
    Phone,
    Address,
    TypeOfInformation,
    AdditionalInformation,
}

impl FieldLabel {
    /// The four fields every extraction run always produces.
    pub const PRIMARY: [FieldLabel; 4] = [
        FieldLabel::Name,
        FieldLabel::Phone,
        FieldLabel::Address,
        FieldLabel::TypeOfInformation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabel::Name => "Name",
            FieldLabel::Phone => "Phone",
            FieldLabel::Address => "Address",
            FieldLabel::TypeOfInformation => "Type of Information",
            FieldLabel::AdditionalInformation => "Additional Information",
        }
    }
}

/// Fields extracted from one text blob.
///
/// Serializes as a JSON object keyed by display label, in display order.
/// `Additional Information` is omitted entirely when no auxiliary data matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Type of Information")]
    pub type_of_information: String,
    #[serde(
        rename = "Additional Information",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_information: Option<String>,
}

impl FieldMap {
    /// A map in which every extractor missed.
    pub fn not_found() -> Self {
        Self {
            name: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
            address: ADDRESS_UNAVAILABLE.to_string(),
            type_of_information: NOT_FOUND.to_string(),
            additional_information: None,
        }
    }

    pub fn get(&self, label: FieldLabel) -> Option<&str> {
        match label {
            FieldLabel::Name => Some(&self.name),
            FieldLabel::Phone => Some(&self.phone),
            FieldLabel::Address => Some(&self.address),
            FieldLabel::TypeOfInformation => Some(&self.type_of_information),
            FieldLabel::AdditionalInformation => self.additional_information.as_deref(),
        }
    }

    pub fn set(&mut self, label: FieldLabel, value: String) {
        match label {
            FieldLabel::Name => self.name = value,
            FieldLabel::Phone => self.phone = value,
            FieldLabel::Address => self.address = value,
            FieldLabel::TypeOfInformation => self.type_of_information = value,
            FieldLabel::AdditionalInformation => self.additional_information = Some(value),
        }
    }

    /// Present entries in display order.
    pub fn entries(&self) -> Vec<(FieldLabel, &str)> {
        let mut entries: Vec<(FieldLabel, &str)> = FieldLabel::PRIMARY
            .iter()
            .filter_map(|label| self.get(*label).map(|v| (*label, v)))
            .collect();
        if let Some(extra) = self.additional_information.as_deref() {
            entries.push((FieldLabel::AdditionalInformation, extra));
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_map_uses_address_sentinel() {
        let map = FieldMap::not_found();
        assert_eq!(map.name, NOT_FOUND);
        assert_eq!(map.phone, NOT_FOUND);
        assert_eq!(map.address, ADDRESS_UNAVAILABLE);
        assert_eq!(map.type_of_information, NOT_FOUND);
        assert!(map.additional_information.is_none());
    }

    #[test]
    fn serializes_with_display_labels_in_order() {
        let mut map = FieldMap::not_found();
        map.set(FieldLabel::Name, "Kim".into());
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"Name":"Kim","Phone":"Not found","Address":"Address information unavailable","Type of Information":"Not found"}"#
        );
    }

    #[test]
    fn additional_information_serialized_only_when_present() {
        let mut map = FieldMap::not_found();
        map.set(FieldLabel::AdditionalInformation, "Date found: 2024-1-1".into());
        let json: serde_json::Value = serde_json::to_value(&map).unwrap();
        assert_eq!(json["Additional Information"], "Date found: 2024-1-1");
    }

    #[test]
    fn entries_follow_display_order() {
        let mut map = FieldMap::not_found();
        map.set(FieldLabel::AdditionalInformation, "x".into());
        let labels: Vec<&str> = map.entries().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Name",
                "Phone",
                "Address",
                "Type of Information",
                "Additional Information"
            ]
        );
    }

    #[test]
    fn get_additional_is_none_when_absent() {
        let map = FieldMap::not_found();
        assert_eq!(map.get(FieldLabel::AdditionalInformation), None);
        assert_eq!(map.get(FieldLabel::Phone), Some(NOT_FOUND));
    }
}
