//! RGB pixel buffer produced by the renderer.

use crate::RgbColor;

/// A rendered image with RGB pixel data.
///
/// Pixels are stored row-major with the origin at the top-left corner,
/// 3 bytes per pixel. `pixels.len()` is always `width * height * 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new PixelBuffer with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer where every pixel has the same colour.
    ///
    /// Allocates `width * height * 3` bytes; sizes are not capped here.
    pub fn filled(width: u32, height: u32, color: RgbColor) -> Self {
        let count = (width as usize) * (height as usize);
        let pixels = color.to_array().repeat(count);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a PixelBuffer from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Colour of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<RgbColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        let rgb = self.pixels.get(idx..idx + 3)?;
        Some(RgbColor::new(rgb[0], rgb[1], rgb[2]))
    }

    /// Iterate over pixels in row-major order.
    pub fn colors(&self) -> impl Iterator<Item = RgbColor> + '_ {
        self.pixels
            .chunks_exact(3)
            .map(|c| RgbColor::new(c[0], c[1], c[2]))
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// True when every pixel has the same colour (an empty buffer counts).
    pub fn is_uniform(&self) -> bool {
        let mut colors = self.colors();
        match colors.next() {
            Some(first) => colors.all(|c| c == first),
            None => true,
        }
    }

    /// RGBA copy with opaque alpha, the layout expected by canvas `ImageData`
    /// and most GPU texture uploads.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixel_count() * 4);
        for c in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(&[c[0], c[1], c[2], 255]);
        }
        rgba
    }

    /// Consume the buffer and return the raw RGB bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_buffer_creation() {
        let buf = PixelBuffer::new(100, 50, vec![0u8; 100 * 50 * 3]);

        assert_eq!(buf.width, 100);
        assert_eq!(buf.height, 50);
        assert_eq!(buf.pixel_count(), 5000);
        assert_eq!(buf.byte_size(), 15000);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_pixel_buffer_empty() {
        let buf = PixelBuffer::new(0, 0, vec![]);
        assert!(buf.is_empty());
        assert!(buf.is_uniform());
    }

    #[test]
    fn test_filled_is_uniform() {
        let buf = PixelBuffer::filled(7, 3, RgbColor::RED);
        assert_eq!(buf.byte_size(), 7 * 3 * 3);
        assert!(buf.is_uniform());
        assert!(buf.colors().all(|c| c == RgbColor::RED));
    }

    #[test]
    fn test_pixel_lookup_is_row_major() {
        // 2x2: black, white / red, black
        let pixels = vec![0, 0, 0, 255, 255, 255, 255, 0, 0, 0, 0, 0];
        let buf = PixelBuffer::new(2, 2, pixels);

        assert_eq!(buf.pixel(0, 0), Some(RgbColor::BLACK));
        assert_eq!(buf.pixel(1, 0), Some(RgbColor::WHITE));
        assert_eq!(buf.pixel(0, 1), Some(RgbColor::RED));
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.pixel(0, 2), None);
        assert!(!buf.is_uniform());
    }

    #[test]
    fn test_to_rgba() {
        let buf = PixelBuffer::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(buf.to_rgba(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let buf = PixelBuffer::filled(4, 3, RgbColor::new(9, 8, 7));
        let img = buf.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(PixelBuffer::from_rgb_image(img), buf);
    }
}
