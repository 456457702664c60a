//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`ConvertError`] via the [`AppError`]
//! wrapper so that route handlers can return `Result<T, AppError>` directly.

use crate::error::ConvertError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Wrapper giving [`ConvertError`] an HTTP representation.
pub struct AppError {
    inner: ConvertError,
}

impl From<ConvertError> for AppError {
    fn from(e: ConvertError) -> Self {
        Self { inner: e }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in conversion handler"
            );
        }

        let code = match &self.inner {
            ConvertError::BadUpload { .. } => "bad_upload",
            ConvertError::NotAPdf { .. } => "not_a_pdf",
            ConvertError::CorruptPdf { .. } => "corrupt_pdf",
            ConvertError::RenderFailed { .. } => "render_failed",
            ConvertError::EncodeFailed { .. } => "encode_failed",
            ConvertError::PdfiumBindingFailed(_) => "pdfium_unavailable",
            ConvertError::InvalidConfig(_) => "invalid_config",
            ConvertError::Internal(_) => "internal_error",
        };

        let body = json!({
            "error": self.inner.to_string(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
