//! Per-pixel color encoders.
//!
//! Every encoder is a pure function of one RGBA8888 source pixel and yields a
//! fixed number of bytes for its format. The 5-6-5 formats truncate with a
//! right shift, they do not round.

use crate::image_pipeline::raw_file::types::ColorFormat;

/// Encoded bytes of one pixel. At most 4 bytes, no heap allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedPixel {
    bytes: [u8; 4],
    len: u8,
}

impl EncodedPixel {
    fn four(bytes: [u8; 4]) -> Self {
        Self { bytes, len: 4 }
    }

    fn three(a: u8, b: u8, c: u8) -> Self {
        Self { bytes: [a, b, c, 0], len: 3 }
    }

    fn two([a, b]: [u8; 2]) -> Self {
        Self { bytes: [a, b, 0, 0], len: 2 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

/// Packs R, G, B into 5-6-5: R in bits 15-11, G in 10-5, B in 4-0.
#[inline]
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3)
}

impl ColorFormat {
    /// Encodes one `[R, G, B, A]` source pixel in this format.
    #[inline]
    pub fn encode(self, [r, g, b, a]: [u8; 4]) -> EncodedPixel {
        match self {
            ColorFormat::Argb8888 => EncodedPixel::four([a, r, g, b]),
            ColorFormat::Bgra8888 => EncodedPixel::four([b, g, r, a]),
            ColorFormat::Rgba8888 => EncodedPixel::four([r, g, b, a]),
            ColorFormat::Rgb565Le => EncodedPixel::two(pack_rgb565(r, g, b).to_le_bytes()),
            ColorFormat::Rgb565Be => EncodedPixel::two(pack_rgb565(r, g, b).to_be_bytes()),
            ColorFormat::Argb565Le => {
                let [lo, hi] = pack_rgb565(r, g, b).to_le_bytes();
                EncodedPixel::three(a, lo, hi)
            }
            ColorFormat::Argb565Be => {
                let [hi, lo] = pack_rgb565(r, g, b).to_be_bytes();
                EncodedPixel::three(a, hi, lo)
            }
        }
    }
}
