use clap::Parser;
use imgcvt::image_pipeline::{ColorFormat, ConversionConfig, Orientation};
use std::path::PathBuf;

/// Convert a PNG image into a RAW v01 pixel dump.
#[derive(Parser, Debug)]
#[command(name = "imgcvt")]
#[command(version)]
pub struct Cli {
    /// Input PNG image
    #[arg(value_name = "IMAGE_FILE")]
    pub input: PathBuf,

    /// Output RAW file
    #[arg(short, long, value_name = "OUTPUT_NAME")]
    pub output: PathBuf,

    /// Output color format: argb8888, bgra8888, rgb565le, rgb565be, argb565le, argb565be, rgba8888
    #[arg(short = 'f', long = "format", default_value = "argb8888")]
    pub format: ColorFormat,

    /// Output image rotation in degrees: 0, 90, 180 or 270
    #[arg(short = 'r', long = "rotation", default_value = "0", allow_hyphen_values = true)]
    pub rotation: Orientation,

    /// Delete the output file if writing fails partway through
    #[arg(long)]
    pub remove_partial: bool,

    /// Log per-stage timings after conversion
    #[arg(long)]
    pub timings: bool,
}

impl Cli {
    pub fn config(&self) -> ConversionConfig {
        ConversionConfig::builder()
            .color_format(self.format)
            .orientation(self.rotation)
            .remove_partial_output(self.remove_partial)
            .build()
    }
}
