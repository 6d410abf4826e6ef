//! qrgen WASM - WebAssembly bindings for qrgen
//!
//! This crate provides WASM bindings to expose the qrgen-core QR rendering
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for rendered QR images
//! - `generate` - QR generation from strings and JS values
//! - `export` - PNG export bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { generate_qr_code_from_json } from '@qrgen/wasm';
//!
//! await init();
//!
//! const qr = generate_qr_code_from_json({ id: 1 }, 256, 256, 1);
//! const data = new ImageData(new Uint8ClampedArray(qr.rgba_pixels()), qr.width, qr.height);
//! ctx.putImageData(data, 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod export;
mod generate;
mod types;

// Re-export public types
pub use export::encode_qr_png;
pub use generate::{encode_qr_code, generate_qr_code_from_json, generate_qr_code_from_string};
pub use types::JsQrImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
