//! Core types for QR encoding.

use crate::EncodeOptions;
use thiserror::Error;

/// Largest accepted width or height, in pixels.
///
/// Keeps a single RGB buffer under 200 MiB so an oversized request fails
/// with an error instead of aborting on allocation.
pub const MAX_DIMENSION: u32 = 8192;

/// Errors that can occur while turning a payload into a QR image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Width or height is zero or above `MAX_DIMENSION`
    #[error(
        "Invalid dimensions: width ({width}) and height ({height}) must be between 1 and {max}",
        max = MAX_DIMENSION
    )]
    InvalidDimensions { width: u32, height: u32 },

    /// The payload does not fit in the largest QR version at the chosen level
    #[error("Payload too long for a QR code: {bytes} bytes")]
    DataTooLong { bytes: usize },

    /// The configured character set cannot represent a payload character
    #[error("Character {character:?} at index {index} is not supported by the character set")]
    UnsupportedCharacter { character: char, index: usize },

    /// Symbol plus quiet zone is larger than the requested image
    #[error(
        "Image {width}x{height} is too small for a QR symbol needing {required}x{required} pixels"
    )]
    DimensionsTooSmall {
        width: u32,
        height: u32,
        required: u32,
    },

    /// Serializing the input value to JSON failed
    #[error("JSON serialization failed: {0}")]
    Serialization(String),

    /// Any other failure reported by the QR encoder
    #[error("QR encoding failed: {0}")]
    Qr(String),
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        EncodeError::Serialization(err.to_string())
    }
}

/// A single encode call: the payload text and how to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeRequest {
    pub payload: String,
    pub options: EncodeOptions,
}

impl EncodeRequest {
    /// Create a request with default rendering options at the given size.
    pub fn new(payload: impl Into<String>, width: u32, height: u32, margin: u32) -> Self {
        Self {
            payload: payload.into(),
            options: EncodeOptions::with_size(width, height, margin),
        }
    }

    /// Create a request with explicit options.
    pub fn with_options(payload: impl Into<String>, options: EncodeOptions) -> Self {
        Self {
            payload: payload.into(),
            options,
        }
    }

    pub fn width(&self) -> u32 {
        self.options.width
    }

    pub fn height(&self) -> u32 {
        self.options.height
    }

    pub fn margin(&self) -> u32 {
        self.options.margin
    }

    /// Check the requested dimensions are usable.
    pub fn validate(&self) -> Result<(), EncodeError> {
        validate_dimensions(self.options.width, self.options.height)
    }
}

pub(crate) fn validate_dimensions(width: u32, height: u32) -> Result<(), EncodeError> {
    let in_range = |side: u32| (1..=MAX_DIMENSION).contains(&side);
    if !in_range(width) || !in_range(height) {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accessors() {
        let req = EncodeRequest::new("hello", 128, 64, 2);
        assert_eq!(req.payload, "hello");
        assert_eq!(req.width(), 128);
        assert_eq!(req.height(), 64);
        assert_eq!(req.margin(), 2);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_zero_dimensions_invalid() {
        let req = EncodeRequest::new("hello", 0, 64, 2);
        assert_eq!(
            req.validate(),
            Err(EncodeError::InvalidDimensions {
                width: 0,
                height: 64
            })
        );

        let req = EncodeRequest::new("hello", 64, 0, 2);
        assert!(matches!(
            req.validate(),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_request_oversized_dimensions_invalid() {
        let req = EncodeRequest::new("hello", 100_000, 100_000, 1);
        assert_eq!(
            req.validate(),
            Err(EncodeError::InvalidDimensions {
                width: 100_000,
                height: 100_000
            })
        );

        let req = EncodeRequest::new("hello", MAX_DIMENSION, 1, 1);
        assert!(req.validate().is_ok());

        let req = EncodeRequest::new("hello", 64, MAX_DIMENSION + 1, 1);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::DataTooLong { bytes: 5000 };
        assert_eq!(err.to_string(), "Payload too long for a QR code: 5000 bytes");

        let err = EncodeError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (10) must be between 1 and 8192"
        );

        let err = EncodeError::UnsupportedCharacter {
            character: '漢',
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "Character '漢' at index 3 is not supported by the character set"
        );
    }

    #[test]
    fn test_serde_json_error_converts() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: EncodeError = json_err.into();
        assert!(matches!(err, EncodeError::Serialization(_)));
    }
}
