//! JSON entry points and the error-image policy.
//!
//! `generate_*` never fails: any encoding error is logged and replaced by a
//! solid red image of the requested size, so a UI always has something to
//! draw. `encode_json` is the same pipeline with the error returned instead.

use crate::encode::{encode_with_options, validate_dimensions, EncodeError};
use crate::{EncodeOptions, PixelBuffer, RgbColor};
use serde::Serialize;

/// Colour of the image returned when generation fails.
pub const ERROR_COLOR: RgbColor = RgbColor::RED;

/// A solid red image of the given size.
///
/// Sizes that `encode` would reject as invalid (zero, or above
/// [`MAX_DIMENSION`](crate::MAX_DIMENSION)) give an empty 0x0 image.
pub fn error_buffer(width: u32, height: u32) -> PixelBuffer {
    if validate_dimensions(width, height).is_err() {
        return PixelBuffer::new(0, 0, Vec::new());
    }
    PixelBuffer::filled(width, height, ERROR_COLOR)
}

/// Serialize `value` to compact JSON and encode it as a QR image.
///
/// # Errors
///
/// `Serialization` if the value cannot be represented as JSON (for example a
/// map with non-string keys), otherwise the same errors as
/// [`encode_with_options`].
pub fn encode_json<T>(value: &T, options: &EncodeOptions) -> Result<PixelBuffer, EncodeError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;
    encode_with_options(&json, options)
}

/// Encode `payload`, or return a red error image on failure.
pub fn generate_from_string(payload: &str, options: &EncodeOptions) -> PixelBuffer {
    generate_with_error(encode_with_options(payload, options), options).0
}

/// Serialize and encode `value`, or return a red error image on failure.
pub fn generate_from_json<T>(value: &T, options: &EncodeOptions) -> PixelBuffer
where
    T: Serialize + ?Sized,
{
    generate_with_error(encode_json(value, options), options).0
}

/// Apply the error-image policy to an encode result.
///
/// On success the buffer is returned unchanged. On failure the error is
/// logged, replaced by [`error_buffer`] at the requested size, and handed
/// back alongside it for callers that report failures themselves.
pub fn generate_with_error(
    result: Result<PixelBuffer, EncodeError>,
    options: &EncodeOptions,
) -> (PixelBuffer, Option<EncodeError>) {
    match result {
        Ok(buffer) => (buffer, None),
        Err(error) => {
            tracing::error!(
                %error,
                width = options.width,
                height = options.height,
                "QR code generation failed, using error image"
            );
            (error_buffer(options.width, options.height), Some(error))
        }
    }
}
