use tracing::{info, instrument, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    conversions::timing::PipelineTimings,
    png::{ImagePngReader, PngReader, RgbaImageData},
    raw_file::{ConversionConfig, RawWriter, StandardRawWriter},
};

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub width: u32,
    pub height: u32,
    /// Header plus pixel data
    pub bytes_written: u64,
    pub timings: PipelineTimings,
}

pub struct PngToRawPipeline<R: PngReader, W: RawWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl PngToRawPipeline<ImagePngReader, StandardRawWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ImagePngReader,
            writer: StandardRawWriter,
            config,
        }
    }
}

impl<R: PngReader, W: RawWriter> PngToRawPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Decodes `input_data` and writes the RAW file to `output`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<ConversionSummary> {
        info!("Starting PNG to RAW conversion");

        let mut timings = PipelineTimings::new();

        let image = timings.time("decode_png", || {
            let _span = tracing::info_span!("decode_png").entered();
            self.reader.read_png(input_data)
        })?;

        self.encode(&image, output, timings)
    }

    /// Converts the PNG at `input_path` into a RAW file at `output_path`.
    ///
    /// The input is decoded before the output is created, so a decode failure
    /// leaves the filesystem untouched.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ConversionSummary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let mut timings = PipelineTimings::new();

        let input_data = timings.time("read_input_file", || {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        let image = timings.time("decode_png", || {
            let _span = tracing::info_span!("decode_png").entered();
            self.reader.read_png(&input_data)
        })?;
        drop(input_data);

        let output_file = timings.time("create_output_file", || {
            let _span = tracing::info_span!("create_output_file").entered();
            File::create(output_path).map_err(|e| {
                ConversionError::SinkOpenError(format!("{}: {}", output_path.display(), e))
            })
        })?;

        let mut output = BufWriter::new(output_file);
        let result = self.encode(&image, &mut output, timings);
        // Close the file before any cleanup below.
        drop(output);

        if let Err(ref e) = result {
            self.handle_partial_output(output_path, e);
        }

        result
    }

    /// Deals with whatever a failed conversion left at `output_path`.
    ///
    /// Only regular files are removed. Device nodes, FIFOs and symlinks are
    /// never deleted, even with `remove_partial_output` set.
    fn handle_partial_output(&self, output_path: &Path, error: &ConversionError) {
        let metadata = match std::fs::symlink_metadata(output_path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(output = %output_path.display(), "Cannot inspect output after error: {}", e);
                return;
            }
        };

        if !metadata.file_type().is_file() {
            warn!(
                output = %output_path.display(),
                "Output is not a regular file ({:?}), leaving it in place",
                metadata.file_type()
            );
            return;
        }

        if !self.config.remove_partial_output {
            warn!(
                output = %output_path.display(),
                bytes_on_disk = metadata.len(),
                "Partial output left in place"
            );
            return;
        }

        match std::fs::remove_file(output_path) {
            Ok(()) => warn!(output = %output_path.display(), "Removed partial output after error: {}", error),
            Err(remove_err) => warn!(
                output = %output_path.display(),
                "Failed to remove partial output: {}",
                remove_err
            ),
        }
    }

    fn encode(
        &self,
        image: &RgbaImageData,
        output: &mut dyn Write,
        mut timings: PipelineTimings,
    ) -> Result<ConversionSummary> {
        let bytes_written = timings.time("encode_raw", || {
            let _span = tracing::info_span!("encode_raw",
                width = image.width(),
                height = image.height()
            ).entered();
            self.writer.write_raw(image, output, &self.config)
        })?;

        info!(
            width = image.width(),
            height = image.height(),
            bytes = bytes_written,
            "Conversion complete"
        );

        Ok(ConversionSummary {
            width: image.width(),
            height: image.height(),
            bytes_written,
            timings,
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
