use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::png::types::RgbaImageData;
use crate::image_pipeline::raw_file::types::ConversionConfig;

pub trait RawWriter {
    /// Writes header and pixel data, returning the number of bytes written.
    fn write_raw(&self, image: &RgbaImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<u64>;
}
