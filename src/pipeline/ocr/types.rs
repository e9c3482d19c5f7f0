use super::OcrError;

/// Tesseract language pack selection: Korean plus English.
pub const DEFAULT_OCR_LANGUAGES: &str = "kor+eng";

/// Optical character recognition collaborator (allows mocking for tests).
pub trait OcrEngine: Send + Sync {
    /// Recognized text for an encoded image, possibly empty.
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError>;
}
