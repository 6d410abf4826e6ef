//! PNG encoding for rendered QR images.
//!
//! Images whose pixels are all grey (the default black-on-white symbol) are
//! written as 8-bit greyscale, a third of the raw size before compression.
//! Anything else, such as custom colours or the red error image, is written
//! as RGB.

use crate::PixelBuffer;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Pixel data length doesn't match the buffer's dimensions
    #[error("Invalid pixel data: expected {expected} bytes for {width}x{height} RGB, got {actual}")]
    InvalidPixelData {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// The buffer has no pixels
    #[error("Cannot export an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a rendered image as PNG bytes.
///
/// # Errors
///
/// - `EmptyImage` for a zero-sized buffer, such as the error image for an
///   invalid size
/// - `InvalidPixelData` if `pixels` does not hold `width * height` RGB triples
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (image.width, image.height);
    if image.is_empty() {
        return Err(ExportError::EmptyImage { width, height });
    }

    let expected = image.pixel_count() * 3;
    if image.pixels.len() != expected {
        return Err(ExportError::InvalidPixelData {
            width,
            height,
            expected,
            actual: image.pixels.len(),
        });
    }

    let grey: Option<Vec<u8>> = image
        .colors()
        .map(|c| (c.r == c.g && c.g == c.b).then_some(c.r))
        .collect();
    let (data, color_type) = match &grey {
        Some(luma) => (luma.as_slice(), ExtendedColorType::L8),
        None => (image.pixels.as_slice(), ExtendedColorType::Rgb8),
    };

    // Flat two-colour rows compress best unfiltered
    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, CompressionType::Best, FilterType::NoFilter)
        .write_image(data, width, height, color_type)
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;

    Ok(out)
}

impl PixelBuffer {
    /// Encode this buffer as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        encode_png(self)
    }
}
