//! Shared state for the API router.

use std::path::PathBuf;

use crate::config::ServiceConfig;
use crate::pipeline::processor::Processor;

/// Shared context for all routes.
#[derive(Clone)]
pub struct ApiContext {
    pub processor: Processor,
    /// Root of the static frontend (`index.html` and assets).
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl ApiContext {
    pub fn new(processor: Processor, config: &ServiceConfig) -> Self {
        Self {
            processor,
            static_dir: config.static_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
