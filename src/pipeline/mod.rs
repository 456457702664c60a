//! Pipeline stages for PDF-to-PNG conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch rendering backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! upload ──▶ render ──▶ encode
//! (bytes)    (pdfium)   (PNG + base64 data URI)
//! ```
//!
//! 1. [`render`] — rasterise every page at the configured DPI; runs in
//!    `spawn_blocking` because pdfium is not async-safe
//! 2. [`encode`] — PNG-encode each `DynamicImage` and wrap it in a
//!    `data:image/png;base64,` URI for the JSON response body

pub mod encode;
pub mod render;
