//! PNG image reading module
//!
//! This module turns encoded PNG bytes into an owned RGBA8888 pixel buffer.

mod reader;
mod image_png_reader;
pub mod types;

pub use reader::PngReader;
pub use image_png_reader::ImagePngReader;
pub use types::RgbaImageData;
