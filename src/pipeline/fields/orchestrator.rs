use super::address::extract_address;
use super::auxiliary::extract_additional_info;
use super::category::extract_type;
use super::name::extract_name;
use super::normalize::normalize_text;
use super::phone::extract_phone;
use super::types::FieldMap;

/// Run every extractor over one text blob.
///
/// The text is normalized once; each extractor then scans it independently.
/// A miss never fails the run, it only leaves that field's sentinel.
pub fn extract_all(text: &str) -> FieldMap {
    tracing::debug!(text_length = text.len(), "Parsing text");
    let normalized = normalize_text(text);

    let fields = FieldMap {
        name: extract_name(&normalized),
        phone: extract_phone(&normalized),
        address: extract_address(&normalized),
        type_of_information: extract_type(&normalized),
        additional_information: extract_additional_info(&normalized),
    };

    tracing::debug!(?fields, "Field extraction complete");
    fields
}
