//! PNG export WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_qr_png } from '@qrgen/wasm';
//!
//! const png = encode_qr_png('https://example.com', { width: 512, margin: 4 });
//! const url = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use crate::generate::{options_from_js, to_js_error};
use crate::types::JsQrImage;
use qrgen_core::encode::encode_with_options;
use wasm_bindgen::prelude::*;

/// Encode a string as a QR code and return PNG bytes.
///
/// # Errors
///
/// Throws if the options are malformed, encoding fails, or PNG export fails.
#[wasm_bindgen]
pub fn encode_qr_png(payload: &str, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options = options_from_js(options)?;
    let buffer = encode_with_options(payload, &options).map_err(|e| to_js_error(&e))?;
    buffer
        .to_png()
        .map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

#[wasm_bindgen]
impl JsQrImage {
    /// Encode this image (QR code or error image) as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, JsValue> {
        self.to_buffer()
            .to_png()
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }
}

/// Tests for export bindings.
///
/// The bindings return `Result<T, JsValue>`, so these exercise the core
/// path the bindings wrap.
#[cfg(test)]
mod tests {
    use crate::generate::generate_qr_code_from_string;

    #[test]
    fn test_generated_image_exports_png() {
        let img = generate_qr_code_from_string("png", 64, 64, 1);
        let png = img.to_buffer().to_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_fallback_image_exports_png() {
        let img = generate_qr_code_from_string(&"x".repeat(5000), 16, 16, 1);
        assert!(img.is_fallback());
        assert!(img.to_buffer().to_png().is_ok());
    }
}
