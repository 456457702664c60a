//! Configuration types for PDF-to-PNG conversion and the HTTP server.
//!
//! Conversion behaviour is controlled through [`ConvertConfig`], built via
//! its [`ConvertConfigBuilder`]; the server adds networking knobs on top in
//! [`ServerConfig`]. Keeping every knob in one place makes it trivial to
//! share configs across requests (they are immutable once built) and to log
//! the effective settings at startup.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// The rasterisation resolution the service contracts to: 300 DPI.
pub const DEFAULT_DPI: u32 = 300;

/// Default cap on either rendered dimension, in pixels.
///
/// 300 DPI of an A0 poster would be a 10 000 × 14 000 px bitmap; the cap
/// keeps a hostile MediaBox from exhausting memory. 12 000 px comfortably
/// covers A3 at 300 DPI without ever clipping ordinary documents.
pub const DEFAULT_MAX_RENDERED_PIXELS: u32 = 12_000;

/// Default upload body limit: 100 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Configuration for a PDF-to-PNG conversion.
///
/// Built via [`ConvertConfig::builder()`] or [`ConvertConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2png_server::ConvertConfig;
///
/// let config = ConvertConfig::builder()
///     .dpi(300)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Rendering DPI used when rasterising each PDF page. Range: 72–600.
    /// Default: 300, the resolution this service contracts to.
    pub dpi: u32,

    /// Maximum rendered image dimension (width or height) in pixels.
    ///
    /// A safety cap independent of DPI: page sizes vary wildly and pdfium
    /// allocates the full bitmap up front. Either dimension is capped, the
    /// other scales proportionally.
    pub max_rendered_pixels: u32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            max_rendered_pixels: DEFAULT_MAX_RENDERED_PIXELS,
        }
    }
}

impl ConvertConfig {
    /// Create a new builder for `ConvertConfig`.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConvertConfig`].
#[derive(Debug)]
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn max_rendered_pixels(mut self, px: u32) -> Self {
        self.config.max_rendered_pixels = px;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConvertConfig, ConvertError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 600 {
            return Err(ConvertError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        // Pdfium bitmaps are addressed with i32 coordinates and 16-bit page
        // dimensions in practice; cap well below i32::MAX so the later
        // `as i32` conversions can never wrap negative.
        if c.max_rendered_pixels < 100 || c.max_rendered_pixels > 65_535 {
            return Err(ConvertError::InvalidConfig(format!(
                "max_rendered_pixels must be 100–65535, got {}",
                c.max_rendered_pixels
            )));
        }
        Ok(self.config)
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub bind: SocketAddr,

    /// Maximum accepted request body size in bytes. Default: 100 MiB.
    ///
    /// Every page of the document is materialised in memory as a base64
    /// string before the response is sent, so the body limit is the only
    /// back-pressure the service has.
    pub max_upload_bytes: usize,

    /// Conversion settings applied to every request.
    pub convert: ConvertConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            convert: ConvertConfig::default(),
        }
    }
}
