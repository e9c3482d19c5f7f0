//! Image upload endpoint.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::processor::ProcessResult;

/// Multipart field carrying the uploaded image.
const IMAGE_FIELD: &str = "image";

/// `POST /process`: OCR, translate and extract fields from one image.
pub async fn upload(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResult>, ApiError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some((filename, bytes));
    }

    let (filename, bytes) =
        upload.ok_or_else(|| ApiError::BadRequest("No image provided".into()))?;
    if filename.is_empty() {
        return Err(ApiError::BadRequest("No selected file".into()));
    }

    tracing::info!(filename = %filename, size_bytes = bytes.len(), "Image received");

    let processor = ctx.processor.clone();
    let result = tokio::task::spawn_blocking(move || processor.process_image(&bytes))
        .await
        .map_err(|e| ApiError::Internal(format!("Processing task failed: {e}")))??;

    Ok(Json(result))
}
