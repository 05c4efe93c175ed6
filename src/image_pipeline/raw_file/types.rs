//! RAW conversion configuration types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Output pixel color formats.
///
/// The discriminant is the code stored in the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorFormat {
    /// 4 bytes: A, R, G, B
    Argb8888 = 0,
    /// 4 bytes: B, G, R, A
    Bgra8888 = 1,
    /// 2 bytes: 5-6-5 value, low byte first
    Rgb565Le = 2,
    /// 2 bytes: 5-6-5 value, high byte first
    Rgb565Be = 3,
    /// 3 bytes: A, then 5-6-5 value low byte first
    Argb565Le = 4,
    /// 3 bytes: A, then 5-6-5 value high byte first
    Argb565Be = 5,
    /// 4 bytes: R, G, B, A (source layout)
    Rgba8888 = 6,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 7] = [
        ColorFormat::Argb8888,
        ColorFormat::Bgra8888,
        ColorFormat::Rgb565Le,
        ColorFormat::Rgb565Be,
        ColorFormat::Argb565Le,
        ColorFormat::Argb565Be,
        ColorFormat::Rgba8888,
    ];

    /// Header code for this format.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| ConversionError::InvalidOption(format!("{code} is not a valid color format code")))
    }

    /// Stable command-line name.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Argb8888 => "argb8888",
            ColorFormat::Bgra8888 => "bgra8888",
            ColorFormat::Rgb565Le => "rgb565le",
            ColorFormat::Rgb565Be => "rgb565be",
            ColorFormat::Argb565Le => "argb565le",
            ColorFormat::Argb565Be => "argb565be",
            ColorFormat::Rgba8888 => "rgba8888",
        }
    }

    /// Encoded size of one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ColorFormat::Argb8888 | ColorFormat::Bgra8888 | ColorFormat::Rgba8888 => 4,
            ColorFormat::Rgb565Le | ColorFormat::Rgb565Be => 2,
            ColorFormat::Argb565Le | ColorFormat::Argb565Be => 3,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ConversionError::InvalidOption(format!("{s} is not a valid color format")))
    }
}

/// Output pixel orientation. Only changes the order pixels are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Orientation {
    Deg0 = 0,
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];

    /// Header code for this orientation.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| ConversionError::InvalidOption(format!("{code} is not a valid orientation code")))
    }

    pub fn degrees(self) -> u32 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    pub fn from_degrees(degrees: u32) -> Result<Self> {
        match degrees {
            0 => Ok(Orientation::Deg0),
            90 => Ok(Orientation::Deg90),
            180 => Ok(Orientation::Deg180),
            270 => Ok(Orientation::Deg270),
            other => Err(ConversionError::InvalidOption(format!("{other} is not a valid rotation"))),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl FromStr for Orientation {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| ConversionError::InvalidOption(format!("{s} is not a valid rotation")))
            .and_then(Self::from_degrees)
    }
}

/// Configuration for PNG to RAW conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Output pixel color format
    pub color_format: ColorFormat,
    /// Output pixel order
    pub orientation: Orientation,
    /// Whether to delete the output file when a write fails partway through.
    /// Off by default, leaving the truncated file in place.
    pub remove_partial_output: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            color_format: ColorFormat::Argb8888,
            orientation: Orientation::Deg0,
            remove_partial_output: false,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    color_format: Option<ColorFormat>,
    orientation: Option<Orientation>,
    remove_partial_output: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn color_format(mut self, color_format: ColorFormat) -> Self {
        self.color_format = Some(color_format);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn remove_partial_output(mut self, remove: bool) -> Self {
        self.remove_partial_output = Some(remove);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            color_format: self.color_format.unwrap_or(default.color_format),
            orientation: self.orientation.unwrap_or(default.orientation),
            remove_partial_output: self.remove_partial_output.unwrap_or(default.remove_partial_output),
        }
    }
}
