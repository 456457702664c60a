//! Image encoding: `DynamicImage` → PNG → base64 data URI.
//!
//! PNG is the contracted output format: lossless, so identical input bytes
//! always produce identical output strings. The base64 step uses the
//! STANDARD engine (RFC 4648 alphabet, padded) — the conventional encoding
//! for `data:` URIs, chosen deliberately over reproducing the original
//! service's text-oriented encoding call.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::DynamicImage;
use std::io::Cursor;
use tracing::debug;

/// MIME prefix that makes each response element a self-describing data URI.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode a rasterised page as a `data:image/png;base64,…` string.
pub fn encode_page(img: &DynamicImage) -> Result<String, image::ImageError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;

    let b64 = STANDARD.encode(&buf);
    debug!("Encoded image → {} bytes base64", b64.len());

    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + b64.len());
    uri.push_str(DATA_URI_PREFIX);
    uri.push_str(&b64);
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

    #[test]
    fn encode_small_image_is_valid_data_uri() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([255, 0, 0])));
        let uri = encode_page(&img).expect("encode should succeed");

        assert!(uri.starts_with(DATA_URI_PREFIX));
        let decoded = STANDARD
            .decode(&uri[DATA_URI_PREFIX.len()..])
            .expect("valid base64");
        assert_eq!(&decoded[..8], &PNG_MAGIC);
    }

    #[test]
    fn decoded_png_round_trips_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 300, Rgb([255, 255, 255])));
        let uri = encode_page(&img).unwrap();

        let png = STANDARD.decode(&uri[DATA_URI_PREFIX.len()..]).unwrap();
        let back = image::load_from_memory(&png).expect("decodable PNG");
        assert_eq!((back.width(), back.height()), (300, 300));
    }

    #[test]
    fn encoding_is_deterministic() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(17, 11, Rgb([12, 34, 56])));
        assert_eq!(encode_page(&img).unwrap(), encode_page(&img).unwrap());
    }
}
