use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::ImageFormat;

use super::types::{OcrEngine, DEFAULT_OCR_LANGUAGES};
use super::OcrError;

/// Page segmentation mode 3: fully automatic, no OSD.
const PAGE_SEG_MODE: &str = "3";
/// Engine mode 3: whatever the installed build defaults to.
const ENGINE_MODE: &str = "3";

/// Tesseract driven through its command-line binary.
pub struct TesseractCli {
    command: PathBuf,
    languages: String,
    tessdata_dir: Option<PathBuf>,
}

impl TesseractCli {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            languages: DEFAULT_OCR_LANGUAGES.to_string(),
            tessdata_dir: None,
        }
    }

    /// Set language(s) for OCR (e.g., "kor", "kor+eng")
    pub fn with_languages(mut self, langs: &str) -> Self {
        self.languages = langs.to_string();
        self
    }

    pub fn with_tessdata_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(ref path) = dir {
            if !path.exists() {
                tracing::warn!(path = %path.display(), "Tessdata directory not found, using engine default");
                return self;
            }
        }
        self.tessdata_dir = dir;
        self
    }

    fn build_command(&self, image_path: &Path) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.arg(image_path)
            .arg("stdout")
            .args(["-l", self.languages.as_str()])
            .args(["--psm", PAGE_SEG_MODE])
            .args(["--oem", ENGINE_MODE]);
        if let Some(ref dir) = self.tessdata_dir {
            cmd.arg("--tessdata-dir").arg(dir);
        }
        cmd
    }
}

impl OcrEngine for TesseractCli {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        let format = check_image(image_bytes)?;

        let mut staged = tempfile::Builder::new()
            .prefix("contact-scan-")
            .suffix(&format!(".{}", file_extension(format)))
            .tempfile()?;
        staged.write_all(image_bytes)?;
        staged.flush()?;

        let output = self
            .build_command(staged.path())
            .output()
            .map_err(|e| OcrError::EngineLaunch {
                command: self.command.display().to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(OcrError::EngineFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| OcrError::Encoding(e.to_string()))?;

        tracing::debug!(
            languages = %self.languages,
            text_length = text.len(),
            "Tesseract OCR complete"
        );
        Ok(text)
    }
}

/// Confirm the bytes are a decodable image and report its format.
pub fn check_image(image_bytes: &[u8]) -> Result<ImageFormat, OcrError> {
    if image_bytes.is_empty() {
        return Err(OcrError::InvalidImage("empty upload".into()));
    }
    let format =
        image::guess_format(image_bytes).map_err(|e| OcrError::InvalidImage(e.to_string()))?;
    image::load_from_memory_with_format(image_bytes, format)
        .map_err(|e| OcrError::InvalidImage(format!("Failed to decode image: {e}")))?;
    Ok(format)
}

fn file_extension(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpg",
        ImageFormat::Tiff => "tif",
        ImageFormat::Bmp => "bmp",
        ImageFormat::Gif => "gif",
        _ => "img",
    }
}

/// Mock OCR engine for unit testing without Tesseract.
pub struct MockOcrEngine {
    pub text: String,
}

impl MockOcrEngine {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl OcrEngine for MockOcrEngine {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}
