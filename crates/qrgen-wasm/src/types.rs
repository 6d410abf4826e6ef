//! WASM-compatible wrapper types for rendered QR images.
//!
//! This module provides JavaScript-friendly types that wrap the core qrgen
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use qrgen_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// A rendered QR image for JavaScript.
///
/// Wraps a core `PixelBuffer` and records whether it is the red error image.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `rgba_pixels()`
/// copy it into a JavaScript `Uint8Array`.
///
/// # Example (TypeScript)
/// ```typescript
/// const qr = generate_qr_code_from_string('{"id":1}', 256, 256, 1);
/// if (qr.is_fallback) console.warn(qr.error);
///
/// const data = new ImageData(new Uint8ClampedArray(qr.rgba_pixels()), qr.width, qr.height);
/// ctx.putImageData(data, 0, 0);
/// qr.free();
/// ```
#[wasm_bindgen]
pub struct JsQrImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    error: Option<String>,
}

#[wasm_bindgen]
impl JsQrImage {
    /// Create a new JsQrImage from dimensions and RGB pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsQrImage {
        JsQrImage {
            width,
            height,
            pixels,
            error: None,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the RGB pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// True when this is the red error image rather than a QR code.
    #[wasm_bindgen(getter)]
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }

    /// Why generation failed, if this is the error image.
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }

    /// Returns RGB pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data with opaque alpha, ready for `ImageData`.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.to_buffer().to_rgba()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsQrImage {
    /// Wrap a successfully rendered buffer.
    pub(crate) fn from_buffer(buffer: PixelBuffer) -> Self {
        Self {
            width: buffer.width,
            height: buffer.height,
            pixels: buffer.pixels,
            error: None,
        }
    }

    /// Wrap the error image along with the failure message.
    pub(crate) fn fallback(buffer: PixelBuffer, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::from_buffer(buffer)
        }
    }

    /// Convert back to a core PixelBuffer. Clones the pixel data.
    pub(crate) fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
