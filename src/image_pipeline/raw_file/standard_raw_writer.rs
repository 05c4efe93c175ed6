use std::io::Write;
use tracing::{debug, info_span};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::png::types::RgbaImageData;
use crate::image_pipeline::raw_file::header::RawHeader;
use crate::image_pipeline::raw_file::sink::RawSink;
use crate::image_pipeline::raw_file::traversal::traverse;
use crate::image_pipeline::raw_file::types::ConversionConfig;
use crate::image_pipeline::raw_file::writer::RawWriter;

pub struct StandardRawWriter;

impl RawWriter for StandardRawWriter {
    fn write_raw(&self, image: &RgbaImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<u64> {
        debug!(
            "Encoding RAW image: {}x{} as {} rotated {}",
            image.width(),
            image.height(),
            config.color_format,
            config.orientation
        );

        let header = RawHeader::new(image.width(), image.height(), config.color_format, config.orientation);
        let mut sink = RawSink::new(output);

        {
            let _span = info_span!("write_header").entered();
            header.write_to(&mut sink)?;
        }

        {
            let _span = info_span!("write_pixels", pixels = image.pixel_count()).entered();
            let format = config.color_format;
            traverse(image, config.orientation, |pixel| {
                sink.append(format.encode(pixel).as_bytes())
            })?;
        }

        sink.flush()?;

        debug!("RAW encoding complete, {} bytes", sink.written());
        Ok(sink.written())
    }
}
