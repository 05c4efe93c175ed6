//! RAW writing module
//!
//! This module provides the RAW v01 header, the per-format color encoders and
//! the orientation traversals, composed by `StandardRawWriter`.

mod writer;
mod standard_raw_writer;
mod sink;
pub mod types;
pub mod header;
pub mod color;
pub mod traversal;

pub use writer::RawWriter;
pub use standard_raw_writer::StandardRawWriter;
pub use sink::RawSink;
pub use types::{ColorFormat, Orientation, ConversionConfig, ConversionConfigBuilder};
pub use header::{RawHeader, HEADER_SIZE};
pub use color::{EncodedPixel, pack_rgb565};
pub use traversal::{Traversal, traverse};
