//! Heuristic field extraction over OCR and translated text.
//!
//! Each field has an ordered table of patterns; the orchestrator runs all of
//! them over one text blob and the merger reconciles the translated-text and
//! original-text results.

pub mod types;
pub mod normalize;
pub mod patterns;
pub mod name;
pub mod phone;
pub mod address;
pub mod category;
pub mod auxiliary;
pub mod orchestrator;
pub mod merge;

pub use types::*;
pub use normalize::normalize_text;
pub use name::extract_name;
pub use phone::extract_phone;
pub use address::extract_address;
pub use category::extract_type;
pub use auxiliary::extract_additional_info;
pub use orchestrator::extract_all;
pub use merge::merge_fields;
