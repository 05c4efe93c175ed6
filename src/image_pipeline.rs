//! Image processing pipeline module
//!
//! This module converts decoded PNG bitmaps into the fixed-header RAW pixel
//! dump format, with separate modules for PNG reading, RAW writing, and
//! conversion orchestration.

pub mod png;
pub mod raw_file;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use png::{
    RgbaImageData,
    PngReader,
    ImagePngReader,
};

pub use raw_file::{
    ColorFormat,
    Orientation,
    ConversionConfig,
    ConversionConfigBuilder,
    RawHeader,
    RawWriter,
    StandardRawWriter,
};

pub use conversions::{
    ConversionSummary,
    PipelineTimings,
    PngToRawPipeline,
};
