//! PNG reader implementation using the image library.
//!
//! Whatever the PNG's own color type and bit depth (palette, grayscale, 16-bit),
//! the decoded image is normalised to 8-bit RGBA so the encoders only ever see
//! one source layout.

use image::ImageFormat;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::png::reader::PngReader;
use crate::image_pipeline::png::types::RgbaImageData;

/// PNG reader backed by the `image` crate's PNG decoder.
pub struct ImagePngReader;

impl PngReader for ImagePngReader {
    /// Decodes PNG bytes into an RGBA8888 buffer.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use imgcvt::image_pipeline::{ImagePngReader, PngReader};
    ///
    /// let bytes = std::fs::read("image.png").unwrap();
    /// let image = ImagePngReader.read_png(&bytes).unwrap();
    /// println!("{}x{}", image.width(), image.height());
    /// ```
    fn read_png(&self, data: &[u8]) -> Result<RgbaImageData> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, ImageFormat::Png)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        debug!("Source color type: {:?}", decoded.color());

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        RgbaImageData::new(width, height, rgba.into_raw())
    }
}
