//! Error types for the pdf2png-server library.
//!
//! A single [`ConvertError`] covers the whole request lifecycle: upload
//! parsing, PDF loading, per-page rasterisation, and PNG/base64 encoding.
//! Every variant maps to exactly one HTTP status via [`ConvertError::
//! http_status`], so the HTTP layer stays a thin translation
//! (see `server::error::AppError`) and the library remains usable without
//! any web framework in scope.

use thiserror::Error;

/// All errors returned by the conversion pipeline and server.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Upload errors ─────────────────────────────────────────────────────
    /// The multipart body could not be parsed, or the `file` field is missing.
    #[error("Bad upload: {detail}")]
    BadUpload { detail: String },

    /// The uploaded bytes do not start with the `%PDF` magic.
    #[error("Uploaded data is not a PDF (first bytes: {magic:?})")]
    NotAPdf { magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// The payload carries the PDF magic but pdfium cannot parse it.
    #[error("PDF could not be parsed: {detail}")]
    CorruptPdf { detail: String },

    /// pdfium returned an error while rasterising a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    /// PNG encoding of a rendered page failed.
    #[error("PNG encoding failed for page {page}: {detail}")]
    EncodeFailed { page: usize, detail: String },

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
         Install pdfium or set PDFIUM_DYNAMIC_LIB_PATH to the directory containing it."
    )]
    PdfiumBindingFailed(String),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error (tempdir creation, task panic, I/O).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConvertError {
    /// The HTTP status code this error should surface as.
    ///
    /// Client mistakes (malformed multipart, non-PDF payload) are 4xx;
    /// everything the client cannot fix is 5xx. A missing pdfium library is
    /// 503 rather than 500: the service is up but cannot do its one job.
    pub fn http_status(&self) -> u16 {
        match self {
            ConvertError::BadUpload { .. } => 400,
            ConvertError::NotAPdf { .. } | ConvertError::CorruptPdf { .. } => 422,
            ConvertError::PdfiumBindingFailed(_) => 503,
            ConvertError::RenderFailed { .. }
            | ConvertError::EncodeFailed { .. }
            | ConvertError::InvalidConfig(_)
            | ConvertError::Internal(_) => 500,
        }
    }
}
