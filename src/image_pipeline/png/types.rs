//! Decoded pixel buffer types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Number of bytes in one RGBA8888 source pixel.
pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Decoded RGBA8888 image, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImageData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImageData {
    /// Wraps a decoded buffer, checking that it holds exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as u64)
            .checked_mul(height as u64)
            .and_then(|n| n.checked_mul(RGBA_BYTES_PER_PIXEL as u64));

        if expected != Some(data.len() as u64) {
            return Err(ConversionError::InvalidDimensions {
                width,
                height,
                len: data.len(),
            });
        }

        Ok(Self { width, height, data })
    }

    /// Width of the image in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the image in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes [R, G, B, A, R, G, B, A, ...]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Byte offset of `(x, y)` in `data`. Callers keep `x < width` and `y < height`.
    #[inline]
    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        (x as usize + y as usize * self.width as usize) * RGBA_BYTES_PER_PIXEL
    }

    /// Source pixel at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        self.data
            .get(offset..offset + RGBA_BYTES_PER_PIXEL)
            .and_then(|px| px.try_into().ok())
    }
}
