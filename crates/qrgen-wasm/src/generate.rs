//! QR generation WASM bindings.
//!
//! # Functions
//!
//! - [`generate_qr_code_from_string`] - Encode text, red image on failure
//! - [`generate_qr_code_from_json`] - Serialize a JS value to JSON and encode it
//! - [`encode_qr_code`] - Encode text with options, surfacing errors
//!
//! # Example
//!
//! ```typescript
//! import { generate_qr_code_from_json, encode_qr_code } from '@qrgen/wasm';
//!
//! const ticket = generate_qr_code_from_json({ id: 1 }, 256, 256, 1);
//!
//! try {
//!   const strict = encode_qr_code(text, { width: 512, errorCorrection: 'high' });
//! } catch (e) {
//!   console.error(e.message);
//! }
//! ```

use crate::types::JsQrImage;
use qrgen_core::encode::{encode_with_options, EncodeError};
use qrgen_core::{encode_json, generate_with_error, EncodeOptions, PixelBuffer};
use wasm_bindgen::prelude::*;

/// Encode a string as a QR image.
///
/// Never throws. If encoding fails the result is a solid red image of the
/// requested size with `is_fallback` set and the reason in `error`. When the
/// size itself is invalid the fallback image is empty.
///
/// # Arguments
///
/// * `payload` - Text to encode
/// * `width` - Output width in pixels (default: 256)
/// * `height` - Output height in pixels (default: 256)
/// * `margin` - Quiet zone in modules (default: 1)
#[wasm_bindgen]
pub fn generate_qr_code_from_string(
    payload: &str,
    width: u32,
    height: u32,
    margin: u32,
) -> JsQrImage {
    let options = EncodeOptions::with_size(width, height, margin);
    image_or_fallback(encode_with_options(payload, &options), &options)
}

/// Serialize a JavaScript value to compact JSON and encode it as a QR image.
///
/// Never throws; see [`generate_qr_code_from_string`].
#[wasm_bindgen]
pub fn generate_qr_code_from_json(
    value: JsValue,
    width: u32,
    height: u32,
    margin: u32,
) -> JsQrImage {
    let options = EncodeOptions::with_size(width, height, margin);
    let result = json_from_js(value).and_then(|json| encode_json(&json, &options));
    image_or_fallback(result, &options)
}

/// Encode a string as a QR image, throwing on failure.
///
/// # Arguments
///
/// * `payload` - Text to encode
/// * `options` - Partial `EncodeOptions` object with camelCase keys
///   (`width`, `height`, `margin`, `errorCorrection`, `characterSet`,
///   `disableEci`, `dark`, `light`), or `undefined` for defaults
///
/// # Errors
///
/// Throws an `Error` if the options are malformed or encoding fails.
#[wasm_bindgen]
pub fn encode_qr_code(payload: &str, options: JsValue) -> Result<JsQrImage, JsValue> {
    let options = options_from_js(options)?;
    encode_with_options(payload, &options)
        .map(JsQrImage::from_buffer)
        .map_err(|e| to_js_error(&e))
}

pub(crate) fn options_from_js(options: JsValue) -> Result<EncodeOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(EncodeOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| js_sys::Error::new(&format!("Invalid QR options: {}", e)).into())
}

pub(crate) fn to_js_error(err: &EncodeError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn json_from_js(value: JsValue) -> Result<serde_json::Value, EncodeError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| EncodeError::Serialization(e.to_string()))
}

fn image_or_fallback(
    result: Result<PixelBuffer, EncodeError>,
    options: &EncodeOptions,
) -> JsQrImage {
    match generate_with_error(result, options) {
        (buffer, None) => JsQrImage::from_buffer(buffer),
        (buffer, Some(err)) => {
            // tracing has no subscriber in the browser; echo to devtools
            if cfg!(target_arch = "wasm32") {
                let message = format!("QR code generation failed: {}", err);
                web_sys::console::error_1(&JsValue::from_str(&message));
            }
            JsQrImage::fallback(buffer, err.to_string())
        }
    }
}
