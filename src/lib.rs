pub mod api;
pub mod config;
pub mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::ApiContext;
use crate::config::ServiceConfig;
use crate::pipeline::ocr::TesseractCli;
use crate::pipeline::processor::Processor;
use crate::pipeline::translation::GoogleTranslator;

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = ServiceConfig::from_env();
    tracing::info!(
        bind = %config.bind_addr,
        static_dir = %config.static_dir.display(),
        ocr_languages = %config.ocr_languages,
        "Configuration loaded"
    );

    let ocr = TesseractCli::new(config.tesseract_cmd.clone())
        .with_languages(&config.ocr_languages)
        .with_tessdata_dir(config.tessdata_dir.clone());

    // The blocking HTTP client owns its own runtime; build it before ours.
    let translator =
        match GoogleTranslator::new(&config.translate_url, config.translate_timeout_secs) {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Cannot create translation client: {e}");
                std::process::exit(1);
            }
        };

    let processor = Processor::new(Arc::new(ocr), Arc::new(translator));
    let ctx = ApiContext::new(processor, &config);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Cannot start async runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(api::serve(ctx, config.bind_addr)) {
        tracing::error!("{e}");
        std::process::exit(1);
    }

    tracing::info!("{} stopped", config::APP_NAME);
}
