use super::types::{FieldLabel, FieldMap, NOT_FOUND};

/// Reconcile extraction results from two variants of the same document.
///
/// `primary` comes from the translated text, `secondary` from the original
/// OCR text. A primary field is replaced only when it is exactly
/// [`NOT_FOUND`] and the secondary field is not. `Additional Information` is
/// taken from `primary` alone, and the address sentinel is not `NOT_FOUND`,
/// so an unavailable primary address is kept.
pub fn merge_fields(primary: FieldMap, secondary: &FieldMap) -> FieldMap {
    let mut merged = primary;
    for label in FieldLabel::PRIMARY {
        let (Some(ours), Some(theirs)) = (merged.get(label), secondary.get(label)) else {
            continue;
        };
        if ours == NOT_FOUND && theirs != NOT_FOUND {
            tracing::debug!(field = label.as_str(), value = theirs, "Using original-text value");
            merged.set(label, theirs.to_string());
        }
    }
    merged
}
