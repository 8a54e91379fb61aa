//! Turn uploaded or pasted image bytes into an RGB pixel buffer.
//!
//! Any format the `image` crate is built with (PNG, JPEG, GIF, BMP, WebP,
//! TIFF, ...) is accepted; the format is sniffed from the leading bytes.
//! Every pixel layout is flattened to 8-bit RGB: palettes and greyscale are
//! expanded, 16-bit samples scaled down, alpha discarded. Pasted clipboard
//! content arrives as a `data:image/...;base64,` URL or as a bare base64
//! payload.

use base64::Engine;
use color_histogram::{GridError, PixelGrid};

use crate::error::DecodeError;

/// A decoded image in row-major RGB8.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Borrow the pixels as a grid for analysis.
    pub fn grid(&self) -> Result<PixelGrid<'_>, GridError> {
        PixelGrid::new(&self.pixels, self.width, self.height)
    }
}

/// Decode encoded image bytes into RGB8.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = image::guess_format(bytes)?;
    let rgb = image::load_from_memory_with_format(bytes, format)?.to_rgb8();
    let (width, height) = rgb.dimensions();

    tracing::debug!(width, height, format = ?format, "Decoded image");

    Ok(DecodedImage {
        width: width as usize,
        height: height as usize,
        pixels: rgb.into_raw(),
    })
}

/// Extract the base64 payload from a data URL, or accept a bare payload.
pub fn data_url_payload(content: &str) -> Result<Vec<u8>, DecodeError> {
    let content = content.trim();
    let payload = match content.split_once(',') {
        Some((header, payload)) => {
            if !header.starts_with("data:") || !header.ends_with(";base64") {
                return Err(DecodeError::InvalidDataUrl(format!(
                    "unsupported header: {header}"
                )));
            }
            payload
        }
        None => content,
    };

    let payload: String = payload.split_whitespace().collect();
    if payload.is_empty() {
        return Err(DecodeError::InvalidDataUrl("empty payload".to_string()));
    }

    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}

/// Decode a pasted `data:image/...;base64,` URL (or bare base64 image).
pub fn decode_data_url(content: &str) -> Result<DecodedImage, DecodeError> {
    let bytes = data_url_payload(content)?;
    decode_image(&bytes)
}
