//! QR encoding pipeline for qrgen.
//!
//! This module provides functionality for:
//! - Converting payload text into byte-mode data for a character set
//! - Building the smallest QR symbol that holds the data
//! - Scaling the symbol into an exact-size RGB pixel buffer
//!
//! # Architecture
//!
//! The pipeline has two stages. [`encode_symbol`] produces an unscaled
//! [`ModuleMatrix`] using the `qrcode` crate, and [`render`] maps it onto a
//! `width x height` canvas, centred, at the largest integer scale that
//! still leaves room for the quiet zone. All operations are synchronous and
//! allocate a fresh buffer per call.
//!
//! # Examples
//!
//! ```ignore
//! use qrgen_core::encode::encode;
//!
//! let image = encode("{\"id\":1}", 256, 256, 1).unwrap();
//! assert_eq!(image.pixel_count(), 256 * 256);
//! ```

mod qr;
mod render;
mod symbol;
mod types;

pub use qr::{encode, encode_request, encode_with_options};
pub use render::{layout, render, Layout};
pub use symbol::{encode_symbol, payload_bytes, ModuleMatrix, MAX_VERSION, MIN_VERSION};
pub use types::{EncodeError, EncodeRequest, MAX_DIMENSION};

pub(crate) use types::validate_dimensions;
