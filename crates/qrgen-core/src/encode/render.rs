//! Rasterization of a module matrix into an RGB pixel buffer.
//!
//! The output is always exactly `width x height`. The symbol is scaled by
//! the largest integer factor that fits the symbol plus quiet zone in both
//! directions, then centred. Leftover pixels become light padding, so the
//! visible border can be wider than `margin` modules.

use super::types::validate_dimensions;
use super::{EncodeError, ModuleMatrix};
use crate::{EncodeOptions, PixelBuffer};
use image::{Rgb, RgbImage};

/// Placement of a symbol inside the output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Pixels per module along each axis.
    pub scale: u32,
    /// X of the symbol's top-left module, in pixels.
    pub left: u32,
    /// Y of the symbol's top-left module, in pixels.
    pub top: u32,
    /// Symbol side length in pixels, quiet zone excluded.
    pub extent: u32,
}

impl Layout {
    /// Module coordinates covering pixel `(x, y)`, if it lies on the symbol.
    pub fn module_at(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        if x < self.left || y < self.top {
            return None;
        }
        let (dx, dy) = (x - self.left, y - self.top);
        if dx >= self.extent || dy >= self.extent {
            return None;
        }
        Some(((dx / self.scale) as usize, (dy / self.scale) as usize))
    }
}

/// Compute where a symbol of `symbol_width` modules lands in the output.
///
/// # Errors
///
/// - `InvalidDimensions` if width or height is zero or above `MAX_DIMENSION`
/// - `DimensionsTooSmall` if the symbol plus `margin` modules on each side
///   does not fit at one pixel per module
pub fn layout(symbol_width: u32, options: &EncodeOptions) -> Result<Layout, EncodeError> {
    let (width, height) = (options.width, options.height);
    validate_dimensions(width, height)?;

    let required = symbol_width.saturating_add(options.margin.saturating_mul(2));
    if width < required || height < required {
        return Err(EncodeError::DimensionsTooSmall {
            width,
            height,
            required,
        });
    }

    let scale = (width / required).min(height / required);
    let extent = symbol_width * scale;

    Ok(Layout {
        scale,
        left: (width - extent) / 2,
        top: (height - extent) / 2,
        extent,
    })
}

/// Render a module matrix with the colours and size from `options`.
pub fn render(matrix: &ModuleMatrix, options: &EncodeOptions) -> Result<PixelBuffer, EncodeError> {
    let symbol_width = u32::try_from(matrix.width())
        .map_err(|_| EncodeError::Qr(format!("symbol width {} out of range", matrix.width())))?;
    let layout = layout(symbol_width, options)?;

    let light = Rgb(options.light.to_array());
    let mut img = RgbImage::from_pixel(options.width, options.height, light);
    let dark = Rgb(options.dark.to_array());

    for my in 0..symbol_width {
        for mx in 0..symbol_width {
            if !matrix.is_dark(mx as usize, my as usize) {
                continue;
            }
            let x0 = layout.left + mx * layout.scale;
            let y0 = layout.top + my * layout.scale;
            for y in y0..y0 + layout.scale {
                for x in x0..x0 + layout.scale {
                    img.put_pixel(x, y, dark);
                }
            }
        }
    }

    Ok(PixelBuffer::from_rgb_image(img))
}
