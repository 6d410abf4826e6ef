//! qrgen Core - QR code rendering library
//!
//! This crate turns a string or any serializable value into a QR code
//! rasterized as an RGB pixel buffer, with a solid red fallback image when
//! encoding fails.
//!
//! # Module Structure
//!
//! - `buffer` - The RGB pixel buffer handed to texture/image collaborators
//! - `encode` - Payload to QR symbol to pixels
//! - `fallback` - JSON entry points and the red error-image policy
//! - `export` - PNG export of rendered buffers

pub mod buffer;
pub mod encode;
pub mod export;
pub mod fallback;

pub use buffer::PixelBuffer;
pub use encode::{
    encode, encode_request, encode_with_options, EncodeError, EncodeRequest, MAX_DIMENSION,
};
pub use fallback::{
    encode_json, error_buffer, generate_from_json, generate_from_string, generate_with_error,
};

/// Default output width in pixels.
pub const DEFAULT_WIDTH: u32 = 256;
/// Default output height in pixels.
pub const DEFAULT_HEIGHT: u32 = 256;
/// Default quiet zone, in modules.
pub const DEFAULT_MARGIN: u32 = 1;

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
    pub const RED: RgbColor = RgbColor::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in RGB order.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// Recovers ~7% of the symbol.
    #[default]
    Low,
    /// Recovers ~15% of the symbol.
    Medium,
    /// Recovers ~25% of the symbol.
    Quartile,
    /// Recovers ~30% of the symbol.
    High,
}

impl ErrorCorrection {
    /// Convert to the qrcode crate's EcLevel.
    pub fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

/// Character set used to turn the payload text into byte-mode data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum CharacterSet {
    #[default]
    #[serde(rename = "utf-8", alias = "UTF-8")]
    Utf8,
    #[serde(rename = "iso-8859-1", alias = "ISO-8859-1")]
    Latin1,
}

impl CharacterSet {
    /// ECI assignment number announcing this character set to decoders.
    pub fn eci_designator(self) -> u32 {
        match self {
            CharacterSet::Utf8 => 26,
            CharacterSet::Latin1 => 3,
        }
    }
}

/// Rendering parameters for a QR code.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial object like `{"width": 512}` is valid.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncodeOptions {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Quiet zone around the symbol, in modules
    pub margin: u32,
    pub error_correction: ErrorCorrection,
    pub character_set: CharacterSet,
    /// Never emit an ECI designator, even for non-ASCII payloads
    pub disable_eci: bool,
    /// Colour of set modules
    pub dark: RgbColor,
    /// Colour of unset modules and the quiet zone
    pub light: RgbColor,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
            error_correction: ErrorCorrection::default(),
            character_set: CharacterSet::default(),
            disable_eci: false,
            dark: RgbColor::BLACK,
            light: RgbColor::WHITE,
        }
    }
}

impl EncodeOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with the given size and margin.
    pub fn with_size(width: u32, height: u32, margin: u32) -> Self {
        Self {
            width,
            height,
            margin,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_options_default() {
        let opts = EncodeOptions::new();
        assert_eq!(opts.width, 256);
        assert_eq!(opts.height, 256);
        assert_eq!(opts.margin, 1);
        assert_eq!(opts.error_correction, ErrorCorrection::Low);
        assert_eq!(opts.character_set, CharacterSet::Utf8);
        assert!(!opts.disable_eci);
        assert_eq!(opts.dark, RgbColor::BLACK);
        assert_eq!(opts.light, RgbColor::WHITE);
    }

    #[test]
    fn test_encode_options_with_size() {
        let opts = EncodeOptions::with_size(100, 50, 4);
        assert_eq!((opts.width, opts.height, opts.margin), (100, 50, 4));
        assert_eq!(opts.error_correction, ErrorCorrection::Low);
    }

    #[test]
    fn test_partial_options_deserialize_with_defaults() {
        let opts: EncodeOptions = serde_json::from_str(r#"{"width": 512}"#).unwrap();
        assert_eq!(opts.width, 512);
        assert_eq!(opts.height, 256);
        assert_eq!(opts.margin, 1);
    }

    #[test]
    fn test_options_deserialize_all_fields() {
        let json = r#"{
            "width": 64,
            "height": 32,
            "margin": 0,
            "errorCorrection": "high",
            "characterSet": "ISO-8859-1",
            "disableEci": true,
            "dark": {"r": 10, "g": 20, "b": 30},
            "light": {"r": 200, "g": 210, "b": 220}
        }"#;
        let opts: EncodeOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.error_correction, ErrorCorrection::High);
        assert_eq!(opts.character_set, CharacterSet::Latin1);
        assert!(opts.disable_eci);
        assert_eq!(opts.dark, RgbColor::new(10, 20, 30));
        assert_eq!(opts.light, RgbColor::new(200, 210, 220));
    }

    #[test]
    fn test_eci_designators() {
        assert_eq!(CharacterSet::Utf8.eci_designator(), 26);
        assert_eq!(CharacterSet::Latin1.eci_designator(), 3);
    }

    #[test]
    fn test_rgb_color_array_conversion() {
        assert_eq!(RgbColor::RED.to_array(), [255, 0, 0]);
        assert_eq!(RgbColor::from([1, 2, 3]), RgbColor::new(1, 2, 3));
    }
}
