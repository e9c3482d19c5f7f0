//! Manual contact submission.

use axum::Json;
use serde::Serialize;

use crate::pipeline::contact::{format_contact, ContactRecord};

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub result: String,
    pub status: &'static str,
    pub message: &'static str,
}

/// `POST /contact`: fill defaults and echo the formatted record.
pub async fn submit(Json(record): Json<ContactRecord>) -> Json<ContactResponse> {
    let record = record.trimmed();
    tracing::debug!(name = %record.name, kind = %record.kind, "Contact submitted");

    Json(ContactResponse {
        result: format_contact(&record),
        status: "success",
        message: "Contact information processed successfully",
    })
}
