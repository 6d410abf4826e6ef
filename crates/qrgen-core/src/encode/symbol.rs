//! QR symbol construction using the `qrcode` crate.
//!
//! The payload is converted to bytes for the configured character set,
//! optionally prefixed with an ECI designator, and split into optimal
//! numeric/alphanumeric/byte segments. The smallest version whose capacity
//! holds the resulting bit stream is chosen.

use super::EncodeError;
use crate::{CharacterSet, EncodeOptions};
use qrcode::bits::Bits;
use qrcode::types::{QrError, QrResult};
use qrcode::{Color, EcLevel, QrCode, Version};
use std::borrow::Cow;

/// Smallest normal QR version.
pub const MIN_VERSION: i16 = 1;
/// Largest normal QR version.
pub const MAX_VERSION: i16 = 40;

/// An unscaled QR symbol: a square grid of dark and light modules.
///
/// The quiet zone is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    version: i16,
    width: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    fn from_code(code: &QrCode, version: i16) -> Self {
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        Self {
            version,
            width: code.width(),
            modules,
        }
    }

    /// QR version (1-40).
    pub fn version(&self) -> i16 {
        self.version
    }

    /// Number of modules along each side.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at column `x`, row `y` is dark.
    /// Out-of-range coordinates are light, like the quiet zone.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.width {
            return false;
        }
        self.modules[y * self.width + x]
    }

    /// Count of dark modules.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }
}

/// Convert payload text into the bytes that go into the symbol.
///
/// UTF-8 borrows the string as-is. ISO-8859-1 maps each char to one byte
/// and fails on the first char above U+00FF.
pub fn payload_bytes(payload: &str, charset: CharacterSet) -> Result<Cow<'_, [u8]>, EncodeError> {
    match charset {
        CharacterSet::Utf8 => Ok(Cow::Borrowed(payload.as_bytes())),
        CharacterSet::Latin1 => {
            let mut bytes = Vec::with_capacity(payload.len());
            for (index, character) in payload.chars().enumerate() {
                let byte = u8::try_from(u32::from(character))
                    .map_err(|_| EncodeError::UnsupportedCharacter { character, index })?;
                bytes.push(byte);
            }
            Ok(Cow::Owned(bytes))
        }
    }
}

/// Encode a payload into the smallest QR symbol that holds it.
///
/// # Errors
///
/// - `UnsupportedCharacter` if the character set cannot represent the payload
/// - `DataTooLong` if no version up to 40 has enough capacity
pub fn encode_symbol(payload: &str, options: &EncodeOptions) -> Result<ModuleMatrix, EncodeError> {
    let data = payload_bytes(payload, options.character_set)?;

    // Pure ASCII reads the same under every charset a decoder might assume
    let eci = (!options.disable_eci && !data.is_ascii())
        .then(|| options.character_set.eci_designator());

    let ec_level = options.error_correction.to_ec_level();

    for version in MIN_VERSION..=MAX_VERSION {
        match build_bits(&data, Version::Normal(version), eci, ec_level) {
            Ok(bits) => {
                let code = QrCode::with_bits(bits, ec_level)
                    .map_err(|e| EncodeError::Qr(e.to_string()))?;
                return Ok(ModuleMatrix::from_code(&code, version));
            }
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(EncodeError::Qr(e.to_string())),
        }
    }

    Err(EncodeError::DataTooLong { bytes: data.len() })
}

fn build_bits(
    data: &[u8],
    version: Version,
    eci: Option<u32>,
    ec_level: EcLevel,
) -> QrResult<Bits> {
    let mut bits = Bits::new(version);
    if let Some(designator) = eci {
        bits.push_eci_designator(designator)?;
    }
    bits.push_optimal_data(data)?;
    bits.push_terminator(ec_level)?;
    Ok(bits)
}
