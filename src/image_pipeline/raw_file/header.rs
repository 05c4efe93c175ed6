//! RAW v01 file header.
//!
//! ```text
//! offset 0:  "RAW"             magic
//! offset 3:  "v01"             version
//! offset 6:  orientation code  u8
//! offset 7:  color format code u8
//! offset 8:  width             u32 BE
//! offset 12: height            u32 BE
//! offset 16: pixel offset      u32 BE, always 32
//! offset 20: '-' x 12          filler
//! ```

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw_file::sink::RawSink;
use crate::image_pipeline::raw_file::types::{ColorFormat, Orientation};

pub const MAGIC: &[u8; 3] = b"RAW";
pub const VERSION: &[u8; 3] = b"v01";
pub const HEADER_SIZE: usize = 32;
/// Pixel data starts right after the header.
pub const PIXEL_OFFSET: u32 = HEADER_SIZE as u32;
const FILLER: u8 = b'-';
const FIELDS_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader {
    pub orientation: Orientation,
    pub color_format: ColorFormat,
    pub width: u32,
    pub height: u32,
}

impl RawHeader {
    pub fn new(width: u32, height: u32, color_format: ColorFormat, orientation: Orientation) -> Self {
        Self {
            orientation,
            color_format,
            width,
            height,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [FILLER; HEADER_SIZE];
        bytes[0..3].copy_from_slice(MAGIC);
        bytes[3..6].copy_from_slice(VERSION);
        bytes[6] = self.orientation.code();
        bytes[7] = self.color_format.code();
        bytes[8..12].copy_from_slice(&self.width.to_be_bytes());
        bytes[12..16].copy_from_slice(&self.height.to_be_bytes());
        bytes[16..FIELDS_SIZE].copy_from_slice(&PIXEL_OFFSET.to_be_bytes());
        bytes
    }

    pub fn write_to(&self, sink: &mut RawSink<'_>) -> Result<()> {
        sink.append(&self.to_bytes())
    }

    /// Parses and validates the first 32 bytes of a RAW file.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let header = bytes.get(..HEADER_SIZE).ok_or_else(|| {
            ConversionError::DecodeError(format!(
                "RAW header needs {HEADER_SIZE} bytes, got {}",
                bytes.len()
            ))
        })?;

        if &header[0..3] != MAGIC {
            return Err(ConversionError::DecodeError("missing RAW magic".into()));
        }
        if &header[3..6] != VERSION {
            return Err(ConversionError::DecodeError(format!(
                "unsupported RAW version {:?}",
                String::from_utf8_lossy(&header[3..6])
            )));
        }

        let be32 = |at: usize| u32::from_be_bytes([header[at], header[at + 1], header[at + 2], header[at + 3]]);

        let pixel_offset = be32(16);
        if pixel_offset != PIXEL_OFFSET {
            return Err(ConversionError::DecodeError(format!(
                "unexpected pixel offset {pixel_offset}"
            )));
        }

        Ok(Self {
            orientation: Orientation::from_code(header[6])?,
            color_format: ColorFormat::from_code(header[7])?,
            width: be32(8),
            height: be32(12),
        })
    }

    /// Size of the pixel data section.
    pub fn pixel_data_len(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.color_format.bytes_per_pixel() as u64
    }

    /// Size of a complete file with this header.
    pub fn file_len(&self) -> u64 {
        HEADER_SIZE as u64 + self.pixel_data_len()
    }
}
