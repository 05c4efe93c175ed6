use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::png::types::RgbaImageData;

pub trait PngReader {
    fn read_png(&self, data: &[u8]) -> Result<RgbaImageData>;
}
