//! Conversion entry point: PDF bytes in, data-URI strings out.
//!
//! ## Why a temp directory?
//!
//! pdfium requires a file-system path — it cannot stream from a byte buffer.
//! Writing the upload into a `TempDir` gives us a path pdfium can open while
//! ensuring cleanup happens automatically when the guard drops, on every
//! exit path including errors and panics. Nothing from a request outlives
//! the request: the working area, the rendered bitmaps, and the encoded
//! strings are all dropped once the response is built.

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::pipeline::{encode, render};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tempfile::TempDir;
use tracing::{debug, info};

/// The result of converting one PDF document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// One `data:image/png;base64,…` string per page, in page order.
    pub images: Vec<String>,
    /// Timing and page-count breakdown for logging.
    pub stats: ConversionStats,
}

/// Timing breakdown of a conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    pub page_count: usize,
    pub render_duration_ms: u64,
    pub total_duration_ms: u64,
}

/// Convert in-memory PDF bytes into one PNG data URI per page.
///
/// # Errors
/// - [`ConvertError::NotAPdf`] when the payload lacks the `%PDF` magic
/// - [`ConvertError::CorruptPdf`] when pdfium rejects the document
/// - [`ConvertError::RenderFailed`] / [`ConvertError::EncodeFailed`] for
///   per-page failures (the whole request fails; there are no partial
///   results)
///
/// A structurally valid zero-page document returns `Ok` with an empty
/// `images` vector.
pub async fn convert_bytes(
    bytes: &[u8],
    config: &ConvertConfig,
) -> Result<ConversionOutput, ConvertError> {
    let total_start = Instant::now();

    check_pdf_magic(bytes)?;

    // Scoped working area, released when `workdir` drops.
    let workdir =
        TempDir::new().map_err(|e| ConvertError::Internal(format!("tempdir: {}", e)))?;
    let pdf_path = workdir.path().join("upload.pdf");
    tokio::fs::write(&pdf_path, bytes)
        .await
        .map_err(|e| ConvertError::Internal(format!("Failed to write upload: {}", e)))?;
    debug!("Upload staged at {}", pdf_path.display());

    let render_start = Instant::now();
    let pages = render::render_all_pages(&pdf_path, config).await?;
    let render_duration_ms = render_start.elapsed().as_millis() as u64;

    let mut images = Vec::with_capacity(pages.len());
    for (idx, img) in pages.iter().enumerate() {
        let uri = encode::encode_page(img).map_err(|e| ConvertError::EncodeFailed {
            page: idx + 1,
            detail: e.to_string(),
        })?;
        images.push(uri);
    }

    let stats = ConversionStats {
        page_count: images.len(),
        render_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };
    info!(
        "Converted {} pages in {}ms ({}ms rendering)",
        stats.page_count, stats.total_duration_ms, stats.render_duration_ms
    );

    Ok(ConversionOutput { images, stats })
}

/// Reject payloads without the `%PDF` magic before handing them to pdfium,
/// so callers get a meaningful error rather than an opaque parse failure.
fn check_pdf_magic(bytes: &[u8]) -> Result<(), ConvertError> {
    let mut magic = [0u8; 4];
    let head = bytes.get(..4).unwrap_or(bytes);
    magic[..head.len()].copy_from_slice(head);
    if &magic != b"%PDF" {
        return Err(ConvertError::NotAPdf { magic });
    }
    Ok(())
}
