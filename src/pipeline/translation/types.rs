use super::TranslationError;

/// Korean → English machine translation collaborator.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

/// Mock translator for testing. Returns a configurable response,
/// or echoes its input when built with [`MockTranslator::identity`].
pub struct MockTranslator {
    response: Option<String>,
}

impl MockTranslator {
    pub fn new(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
        }
    }

    pub fn identity() -> Self {
        Self { response: None }
    }
}

impl Translator for MockTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslationError> {
        Ok(self.response.clone().unwrap_or_else(|| text.to_string()))
    }
}

/// Translator that always fails, for exercising the fallback path.
pub struct FailingTranslator {
    reason: String,
}

impl FailingTranslator {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl Translator for FailingTranslator {
    fn translate(&self, _text: &str) -> Result<String, TranslationError> {
        Err(TranslationError::HttpClient(self.reason.clone()))
    }
}
