//! PDF rasterisation: render every page to a `DynamicImage` via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async contexts.
//! `tokio::task::spawn_blocking` moves the work onto a dedicated thread pool
//! thread designed for blocking operations, preventing the Tokio worker
//! threads from stalling during CPU-heavy rendering.
//!
//! ## DPI to pixels
//!
//! PDF page geometry is in points (1 pt = 1/72 inch). Rendering at D DPI
//! means a target width of `width_pt × D / 72` pixels, capped by
//! `max_rendered_pixels` so a hostile MediaBox cannot exhaust memory.

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Rasterise every page of the PDF at `pdf_path`, in page order.
///
/// This runs inside `spawn_blocking` since pdfium operations are CPU-bound.
/// A zero-page document yields an empty vector, not an error.
pub async fn render_all_pages(
    pdf_path: &Path,
    config: &ConvertConfig,
) -> Result<Vec<DynamicImage>, ConvertError> {
    let path = pdf_path.to_path_buf();
    let dpi = config.dpi;
    let max_pixels = config.max_rendered_pixels;

    tokio::task::spawn_blocking(move || render_all_pages_blocking(&path, dpi, max_pixels))
        .await
        .map_err(|e| ConvertError::Internal(format!("Render task panicked: {}", e)))?
}

/// Check whether a pdfium library can be bound on this host.
///
/// Used by the server at startup to warn early, and by tests to skip
/// themselves on machines without pdfium installed.
pub fn pdfium_available() -> bool {
    Pdfium::bind_to_system_library().is_ok()
}

/// Blocking implementation of page rendering.
fn render_all_pages_blocking(
    pdf_path: &Path,
    dpi: u32,
    max_pixels: u32,
) -> Result<Vec<DynamicImage>, ConvertError> {
    let bindings = Pdfium::bind_to_system_library()
        .map_err(|e| ConvertError::PdfiumBindingFailed(format!("{:?}", e)))?;
    let pdfium = Pdfium::new(bindings);

    let document = pdfium
        .load_pdf_from_file(pdf_path, None)
        .map_err(|e| ConvertError::CorruptPdf {
            detail: format!("{:?}", e),
        })?;

    let pages = document.pages();
    let total_pages = pages.len();
    info!("PDF loaded: {} pages", total_pages);

    let mut results = Vec::with_capacity(total_pages as usize);

    for idx in 0..total_pages {
        let page = pages.get(idx).map_err(|e| ConvertError::RenderFailed {
            page: idx as usize + 1,
            detail: format!("{:?}", e),
        })?;

        let render_config = render_config_for(&page, dpi, max_pixels);

        let bitmap =
            page.render_with_config(&render_config)
                .map_err(|e| ConvertError::RenderFailed {
                    page: idx as usize + 1,
                    detail: format!("{:?}", e),
                })?;

        // pdfium hands back BGRA; flatten to RGB before PNG encoding.
        let image = DynamicImage::ImageRgb8(bitmap.as_image().to_rgb8());
        debug!(
            "Rendered page {} → {}x{} px",
            idx + 1,
            image.width(),
            image.height()
        );

        results.push(image);
    }

    Ok(results)
}

/// Compute the render target for one page from its physical size and the DPI.
fn render_config_for(page: &PdfPage, dpi: u32, max_pixels: u32) -> PdfRenderConfig {
    let width_px = target_width_px(page.width().value, dpi, max_pixels);
    PdfRenderConfig::new()
        .set_target_width(width_px)
        .set_maximum_height(max_pixels as i32)
}

fn target_width_px(width_pt: f32, dpi: u32, max_pixels: u32) -> i32 {
    let px = (width_pt * dpi as f32 / 72.0).round().max(1.0) as i32;
    px.min(max_pixels as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_inch_page_at_300_dpi_is_300_px() {
        // 72 pt = 1 inch
        assert_eq!(target_width_px(72.0, 300, 12_000), 300);
    }

    #[test]
    fn a4_width_at_300_dpi() {
        // A4 is 595.276 pt wide → 8.27 in → 2480 px at 300 DPI
        assert_eq!(target_width_px(595.276, 300, 12_000), 2480);
    }

    #[test]
    fn cap_clamps_oversized_pages() {
        // A0 poster width, absurd cap exceeded
        assert_eq!(target_width_px(2383.94, 300, 4_000), 4_000);
    }

    #[test]
    fn degenerate_width_renders_at_least_one_pixel() {
        assert_eq!(target_width_px(0.1, 72, 12_000), 1);
    }
}
