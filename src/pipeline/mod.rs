pub mod fields;
pub mod ocr;
pub mod translation;
pub mod contact;
pub mod processor; // OCR → translate → dual-source field extraction
