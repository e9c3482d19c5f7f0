pub mod types;
pub mod google;

pub use types::*;
pub use google::*;

use thiserror::Error;

/// Text translated in place of an empty OCR result.
pub const NO_TEXT_PLACEHOLDER: &str = "No text detected";

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Translation service unreachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Translation service returned error (status {status}): {body}")]
    Service { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Unexpected translation response: {0}")]
    ResponseParsing(String),

    #[error("Text length {len} is outside the supported range 1..={max}")]
    InvalidLength { len: usize, max: usize },
}

/// Translate OCR output, never failing.
///
/// Blank input is replaced by [`NO_TEXT_PLACEHOLDER`] before translation.
/// A failed translation becomes `"Translation error: <reason>"`, which the
/// field extractors then process like any other text.
pub fn translate_or_placeholder(translator: &dyn Translator, text: &str) -> String {
    let source = if text.trim().is_empty() {
        NO_TEXT_PLACEHOLDER
    } else {
        text
    };

    match translator.translate(source) {
        Ok(translated) => {
            tracing::debug!(text_length = translated.len(), "Translated text");
            translated
        }
        Err(e) => {
            tracing::error!(error = %e, "Translation error");
            format!("Translation error: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_translation_passes_through() {
        let translator = MockTranslator::new("Name: Hong Gil-dong");
        assert_eq!(
            translate_or_placeholder(&translator, "성명: 홍길동"),
            "Name: Hong Gil-dong"
        );
    }

    #[test]
    fn blank_text_translated_as_placeholder() {
        let translator = MockTranslator::identity();
        assert_eq!(translate_or_placeholder(&translator, "  \n "), NO_TEXT_PLACEHOLDER);
    }

    #[test]
    fn failure_becomes_error_text() {
        let translator = FailingTranslator::new("quota exceeded");
        assert_eq!(
            translate_or_placeholder(&translator, "성명: 홍길동"),
            "Translation error: HTTP client error: quota exceeded"
        );
    }
}
