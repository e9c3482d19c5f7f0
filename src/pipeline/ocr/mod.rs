pub mod types;
pub mod engine;

pub use types::*;
pub use engine::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot identify image file: {0}")]
    InvalidImage(String),

    #[error("Failed to launch OCR engine '{command}': {reason}")]
    EngineLaunch { command: String, reason: String },

    #[error("OCR engine exited with status {status}: {stderr}")]
    EngineFailed { status: String, stderr: String },

    #[error("OCR output is not valid UTF-8: {0}")]
    Encoding(String),
}
