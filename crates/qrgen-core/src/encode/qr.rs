//! Payload-to-image entry points.
//!
//! These compose [`encode_symbol`] and [`render`] and surface every error to
//! the caller. For the variant that never fails and substitutes a red image
//! instead, see [`crate::fallback`].

use super::{encode_symbol, render, validate_dimensions, EncodeError, EncodeRequest};
use crate::{EncodeOptions, PixelBuffer};

/// Encode a UTF-8 payload as a black-on-white QR image.
///
/// # Arguments
///
/// * `payload` - Text to encode (any UTF-8, including serialized JSON)
/// * `width` - Output width in pixels
/// * `height` - Output height in pixels
/// * `margin` - Quiet zone around the symbol, in modules
///
/// # Returns
///
/// A `PixelBuffer` of exactly `width * height` pixels.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero or larger than `MAX_DIMENSION`
/// - The payload exceeds QR capacity
/// - The symbol plus quiet zone does not fit the requested size
///
/// # Example
///
/// ```
/// use qrgen_core::encode::encode;
///
/// let image = encode("{\"id\":1}", 256, 256, 1).unwrap();
/// assert_eq!(image.byte_size(), 256 * 256 * 3);
/// ```
pub fn encode(
    payload: &str,
    width: u32,
    height: u32,
    margin: u32,
) -> Result<PixelBuffer, EncodeError> {
    encode_with_options(payload, &EncodeOptions::with_size(width, height, margin))
}

/// Encode a payload with full control over error correction, character set
/// and colours.
pub fn encode_with_options(
    payload: &str,
    options: &EncodeOptions,
) -> Result<PixelBuffer, EncodeError> {
    // Reject bad sizes before doing any encoding work
    validate_dimensions(options.width, options.height)?;

    let matrix = encode_symbol(payload, options)?;
    render(&matrix, options)
}

/// Encode an [`EncodeRequest`].
pub fn encode_request(request: &EncodeRequest) -> Result<PixelBuffer, EncodeError> {
    request.validate()?;
    encode_with_options(&request.payload, &request.options)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::encode::{layout, ModuleMatrix};
    use crate::{EncodeOptions, PixelBuffer, RgbColor};

    /// Decode a rendered buffer with rqrr, returning the text content.
    pub fn decode(buf: &PixelBuffer) -> Option<String> {
        let mut img = rqrr::PreparedImage::prepare_from_greyscale(
            buf.width as usize,
            buf.height as usize,
            |x, y| match buf.pixel(x as u32, y as u32) {
                Some(c) if c == RgbColor::BLACK => 0,
                _ => 255,
            },
        );
        let grids = img.detect_grids();
        let grid = grids.first()?;
        grid.decode().ok().map(|(_, content)| content)
    }

    /// Read modules back out of a rendered buffer by sampling module centres.
    pub fn sample_modules(
        buf: &PixelBuffer,
        symbol_width: usize,
        options: &EncodeOptions,
    ) -> Vec<bool> {
        let l = layout(symbol_width as u32, options).unwrap();
        let mut modules = Vec::with_capacity(symbol_width * symbol_width);
        for my in 0..symbol_width as u32 {
            for mx in 0..symbol_width as u32 {
                let x = l.left + mx * l.scale + l.scale / 2;
                let y = l.top + my * l.scale + l.scale / 2;
                modules.push(buf.pixel(x, y) == Some(options.dark));
            }
        }
        modules
    }

    pub fn matrix_modules(matrix: &ModuleMatrix) -> Vec<bool> {
        let w = matrix.width();
        (0..w * w).map(|i| matrix.is_dark(i % w, i / w)).collect()
    }

    /// Count light pixels outside the symbol's bounding box.
    pub fn border_light_pixels(
        buf: &PixelBuffer,
        symbol_width: usize,
        options: &EncodeOptions,
    ) -> usize {
        let l = layout(symbol_width as u32, options).unwrap();
        let mut count = 0;
        for y in 0..buf.height {
            for x in 0..buf.width {
                if l.module_at(x, y).is_none() && buf.pixel(x, y) == Some(options.light) {
                    count += 1;
                }
            }
        }
        count
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
