//! # pdf2png-server
//!
//! A single-endpoint HTTP service that converts an uploaded PDF into one PNG
//! per page, returned inline as base64 data URIs.
//!
//! ## Pipeline Overview
//!
//! ```text
//! POST /convert (multipart `file`)
//!  │
//!  ├─ 1. Stage    write upload into a scoped temp dir (pdfium needs a path)
//!  ├─ 2. Render   rasterise every page at 300 DPI via pdfium (spawn_blocking)
//!  ├─ 3. Encode   PNG → base64 → "data:image/png;base64,…"
//!  └─ 4. Respond  200 OK  {"images": [<one string per page, in page order>]}
//! ```
//!
//! Each request is self-contained: the temp dir, the rendered bitmaps, and
//! the encoded strings all drop when the response is built, and requests
//! share no mutable state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2png_server::{serve, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! The library can also be used without the HTTP layer:
//!
//! ```rust,no_run
//! use pdf2png_server::{convert_bytes, ConvertConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("document.pdf")?;
//! let output = convert_bytes(&bytes, &ConvertConfig::default()).await?;
//! assert!(output.images.iter().all(|s| s.starts_with("data:image/png;base64,")));
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2png-server` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;
pub mod server;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConvertConfig, ConvertConfigBuilder, ServerConfig, DEFAULT_DPI};
pub use convert::{convert_bytes, ConversionOutput, ConversionStats};
pub use error::ConvertError;
pub use pipeline::encode::DATA_URI_PREFIX;
pub use pipeline::render::pdfium_available;
pub use server::{build_router, serve, AppState};
