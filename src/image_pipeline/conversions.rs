//! Pipeline conversions module
//!
//! This module contains orchestration logic for PNG to RAW conversion.

mod png_to_raw;
mod timing;

#[cfg(test)]
mod tests;

pub use png_to_raw::{ConversionSummary, PngToRawPipeline};
pub use timing::{PipelineTimings, StepTiming, Timer};
