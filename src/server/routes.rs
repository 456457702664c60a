//! Route handlers for the HTTP API.

use crate::convert::convert_bytes;
use crate::error::ConvertError;
use crate::server::error::AppError;
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

/// JSON body of a successful `/convert` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// One `data:image/png;base64,…` string per page, in page order.
    pub images: Vec<String>,
}

/// `POST /convert` — rasterise an uploaded PDF into per-page PNG data URIs.
///
/// Expects a multipart body with a `file` field carrying raw PDF bytes.
/// Unknown fields are ignored; a missing `file` field is a 400.
pub async fn convert_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>, AppError> {
    let mut payload: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ConvertError::BadUpload {
            detail: format!("Failed to parse multipart data: {}", e),
        }
    })? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| ConvertError::BadUpload {
            detail: format!("Failed to read file field: {}", e),
        })?;
        info!(
            size = bytes.len(),
            filename = filename.as_deref().unwrap_or("<unnamed>"),
            "Received upload"
        );
        payload = Some(bytes);
        break;
    }

    let payload = payload.ok_or_else(|| ConvertError::BadUpload {
        detail: "missing multipart field 'file'".into(),
    })?;

    let output = convert_bytes(&payload, &state.convert).await?;

    Ok(Json(ConvertResponse {
        images: output.images,
    }))
}

/// `GET /health` — liveness probe.
pub async fn health_check() -> &'static str {
    "OK"
}
