use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::pipeline::ocr::DEFAULT_OCR_LANGUAGES;
use crate::pipeline::translation::DEFAULT_TRANSLATE_URL;

/// Application-level constants
pub const APP_NAME: &str = "Contact Scan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_TESSERACT_CMD: &str = "tesseract";
const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Default `EnvFilter` directive when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,contact_scan_lib=debug,tower_http=debug"
    } else {
        "info"
    }
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// `CONTACT_SCAN_BIND`
    pub bind_addr: SocketAddr,
    /// `CONTACT_SCAN_STATIC_DIR`: holds `index.html` and the frontend assets.
    pub static_dir: PathBuf,
    /// `TESSERACT_CMD`
    pub tesseract_cmd: PathBuf,
    /// `TESSDATA_PREFIX`
    pub tessdata_dir: Option<PathBuf>,
    /// `CONTACT_SCAN_OCR_LANG`
    pub ocr_languages: String,
    /// `CONTACT_SCAN_TRANSLATE_URL`
    pub translate_url: String,
    /// `CONTACT_SCAN_TRANSLATE_TIMEOUT_SECS`
    pub translate_timeout_secs: u64,
    /// `CONTACT_SCAN_MAX_UPLOAD_BYTES`
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            static_dir: PathBuf::from("static"),
            tesseract_cmd: PathBuf::from(DEFAULT_TESSERACT_CMD),
            tessdata_dir: None,
            ocr_languages: DEFAULT_OCR_LANGUAGES.to_string(),
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            translate_timeout_secs: DEFAULT_TRANSLATE_TIMEOUT_SECS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServiceConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bind_addr: parse_or(text("CONTACT_SCAN_BIND"), "CONTACT_SCAN_BIND", defaults.bind_addr),
            static_dir: text("CONTACT_SCAN_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            tesseract_cmd: text("TESSERACT_CMD")
                .map(PathBuf::from)
                .unwrap_or(defaults.tesseract_cmd),
            tessdata_dir: text("TESSDATA_PREFIX").map(PathBuf::from),
            ocr_languages: text("CONTACT_SCAN_OCR_LANG").unwrap_or(defaults.ocr_languages),
            translate_url: text("CONTACT_SCAN_TRANSLATE_URL").unwrap_or(defaults.translate_url),
            translate_timeout_secs: parse_or(
                text("CONTACT_SCAN_TRANSLATE_TIMEOUT_SECS"),
                "CONTACT_SCAN_TRANSLATE_TIMEOUT_SECS",
                defaults.translate_timeout_secs,
            ),
            max_upload_bytes: parse_or(
                text("CONTACT_SCAN_MAX_UPLOAD_BYTES"),
                "CONTACT_SCAN_MAX_UPLOAD_BYTES",
                defaults.max_upload_bytes,
            ),
        }
    }
}

/// Parse `raw`, keeping `default` (with a warning) when it does not parse.
fn parse_or<T: FromStr>(raw: Option<String>, key: &str, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %value, "Invalid configuration value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_empty() {
        let config = ServiceConfig::from_lookup(|_| None);
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.ocr_languages, "kor+eng");
    }

    #[test]
    fn overrides_from_environment() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("CONTACT_SCAN_BIND", "0.0.0.0:8080"),
            ("TESSERACT_CMD", "/usr/local/bin/tesseract"),
            ("TESSDATA_PREFIX", "/usr/share/tessdata"),
            ("CONTACT_SCAN_OCR_LANG", "kor"),
            ("CONTACT_SCAN_TRANSLATE_TIMEOUT_SECS", "5"),
            ("CONTACT_SCAN_MAX_UPLOAD_BYTES", "1024"),
        ]));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.tesseract_cmd, PathBuf::from("/usr/local/bin/tesseract"));
        assert_eq!(config.tessdata_dir, Some(PathBuf::from("/usr/share/tessdata")));
        assert_eq!(config.ocr_languages, "kor");
        assert_eq!(config.translate_timeout_secs, 5);
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("CONTACT_SCAN_BIND", "not-an-address"),
            ("CONTACT_SCAN_TRANSLATE_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.translate_timeout_secs, DEFAULT_TRANSLATE_TIMEOUT_SECS);
    }

    #[test]
    fn blank_values_ignored() {
        let config = ServiceConfig::from_lookup(lookup(&[("CONTACT_SCAN_OCR_LANG", "  ")]));
        assert_eq!(config.ocr_languages, DEFAULT_OCR_LANGUAGES);
    }

    #[test]
    fn app_name_is_contact_scan() {
        assert_eq!(APP_NAME, "Contact Scan");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
