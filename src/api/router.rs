//! Application router.
//!
//! API routes are registered first; every other path falls through to the
//! static frontend, so `GET /` serves `index.html` from the static directory.
//!
//! Layers (outermost → innermost): Trace → CORS → body limit.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the full application router.
pub fn app_router(ctx: ApiContext) -> Router {
    let static_files = ServeDir::new(&ctx.static_dir);
    let body_limit = DefaultBodyLimit::max(ctx.max_upload_bytes);

    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/process", post(endpoints::process::upload))
        .route("/contact", post(endpoints::contact::submit))
        .fallback_service(static_files)
        .layer(body_limit)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
