//! Image export for qrgen.
//!
//! This module provides functionality for:
//! - Encoding rendered QR images to PNG, greyscale when the image allows
//!
//! QR codes are flat two-colour images, so a lossless format keeps module
//! edges exact for scanners.
//!
//! # Examples
//!
//! ```ignore
//! use qrgen_core::{encode, export::encode_png};
//!
//! let image = encode("hello", 256, 256, 1).unwrap();
//! let png = encode_png(&image).unwrap();
//! std::fs::write("hello.png", png).unwrap();
//! ```

mod png;

pub use png::{encode_png, ExportError};
