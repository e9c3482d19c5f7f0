use std::time::Duration;

use super::types::Translator;
use super::TranslationError;

/// Google's public single-shot translation endpoint.
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Longest text accepted per request.
const MAX_TRANSLATION_CHARS: usize = 5000;

const SOURCE_LANGUAGE: &str = "ko";
const TARGET_LANGUAGE: &str = "en";

/// Google Translate HTTP client (blocking; call from a blocking context).
pub struct GoogleTranslator {
    endpoint: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GoogleTranslator {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, TranslationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TranslationError::HttpClient(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let len = text.chars().count();
        if len == 0 || len > MAX_TRANSLATION_CHARS {
            return Err(TranslationError::InvalidLength {
                len,
                max: MAX_TRANSLATION_CHARS,
            });
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", SOURCE_LANGUAGE),
                ("tl", TARGET_LANGUAGE),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    TranslationError::Connection(self.endpoint.clone())
                } else if e.is_timeout() {
                    TranslationError::Timeout(self.timeout_secs)
                } else {
                    TranslationError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TranslationError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| TranslationError::ResponseParsing(e.to_string()))?;

        parse_translation(&body)
    }
}

/// Concatenate the translated segments of a `translate_a/single` response.
///
/// The body looks like `[[["Hello","안녕",null,null,10], ...], null, "ko", ...]`.
fn parse_translation(body: &serde_json::Value) -> Result<String, TranslationError> {
    let segments = body
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslationError::ResponseParsing("missing segment list".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::ResponseParsing("no translated segments".into()));
    }
    Ok(translated)
}
