#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};
    use crate::image_pipeline::common::error::{Result, ConversionError};
    use crate::image_pipeline::png::{PngReader, RgbaImageData};
    use crate::image_pipeline::raw_file::{
        ColorFormat, ConversionConfig, Orientation, RawHeader, RawWriter, StandardRawWriter, HEADER_SIZE,
    };
    use crate::image_pipeline::conversions::PngToRawPipeline;

    struct MockReader {
        should_fail: bool,
        mock_data: Option<RgbaImageData>,
    }

    impl PngReader for MockReader {
        fn read_png(&self, _data: &[u8]) -> Result<RgbaImageData> {
            if self.should_fail {
                return Err(ConversionError::DecodeError("Mock decode error".to_string()));
            }
            Ok(self.mock_data.clone().unwrap_or_else(|| {
                RgbaImageData::new(10, 10, vec![0u8; 10 * 10 * 4]).unwrap()
            }))
        }
    }

    struct MockWriter {
        should_fail: bool,
        written_data: Arc<Mutex<Vec<(RgbaImageData, ConversionConfig)>>>,
    }

    impl RawWriter for MockWriter {
        fn write_raw(&self, image: &RgbaImageData, _output: &mut dyn Write, config: &ConversionConfig) -> Result<u64> {
            if self.should_fail {
                return Err(ConversionError::ShortWrite {
                    written: 0,
                    source: std::io::Error::other("Mock write error"),
                });
            }
            self.written_data.lock().unwrap().push((image.clone(), config.clone()));
            Ok(0)
        }
    }

    fn two_by_one() -> RgbaImageData {
        RgbaImageData::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap()
    }

    #[test]
    fn test_successful_conversion() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: false, mock_data: None };
        let writer = MockWriter { should_fail: false, written_data: written.clone() };

        let pipeline = PngToRawPipeline::with_custom(
            reader,
            writer,
            ConversionConfig::default(),
        );

        let mut output = Cursor::new(Vec::new());
        let summary = pipeline.convert(b"fake png data", &mut output).unwrap();

        assert_eq!((summary.width, summary.height), (10, 10));
        assert!(summary.timings.get_step("decode_png").is_some());
        assert!(summary.timings.get_step("encode_raw").is_some());
        assert_eq!(written.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_config_is_passed_to_writer() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: false, mock_data: None };
        let writer = MockWriter { should_fail: false, written_data: written.clone() };
        let config = ConversionConfig::builder()
            .color_format(ColorFormat::Bgra8888)
            .orientation(Orientation::Deg270)
            .build();

        let pipeline = PngToRawPipeline::with_custom(reader, writer, config);
        pipeline.convert(b"fake png data", &mut Cursor::new(Vec::new())).unwrap();

        let calls = written.lock().unwrap();
        assert_eq!(calls[0].1.color_format, ColorFormat::Bgra8888);
        assert_eq!(calls[0].1.orientation, Orientation::Deg270);
    }

    #[test]
    fn test_reader_failure() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: true, mock_data: None };
        let writer = MockWriter { should_fail: false, written_data: written.clone() };

        let pipeline = PngToRawPipeline::with_custom(
            reader,
            writer,
            ConversionConfig::default(),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake png data", &mut output);

        assert!(matches!(result.unwrap_err(), ConversionError::DecodeError(_)));
        assert!(written.lock().unwrap().is_empty());
        assert!(output.get_ref().is_empty());
    }

    #[test]
    fn test_writer_failure() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: false, mock_data: None };
        let writer = MockWriter { should_fail: true, written_data: written };

        let pipeline = PngToRawPipeline::with_custom(
            reader,
            writer,
            ConversionConfig::default(),
        );

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake png data", &mut output);

        assert!(matches!(result.unwrap_err(), ConversionError::ShortWrite { .. }));
    }

    #[test]
    fn test_end_to_end_rgba8888() {
        let reader = MockReader { should_fail: false, mock_data: Some(two_by_one()) };
        let config = ConversionConfig::builder()
            .color_format(ColorFormat::Rgba8888)
            .build();
        let pipeline = PngToRawPipeline::with_custom(reader, StandardRawWriter, config);

        let mut output = Vec::new();
        let summary = pipeline.convert(b"fake png data", &mut output).unwrap();

        assert_eq!(summary.bytes_written, 40);
        assert_eq!(output.len(), 40);
        let header = RawHeader::parse(&output).unwrap();
        assert_eq!((header.width, header.height), (2, 1));
        assert_eq!(header.color_format, ColorFormat::Rgba8888);
        assert_eq!(&output[HEADER_SIZE..], &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_end_to_end_rotated_90() {
        let reader = MockReader { should_fail: false, mock_data: Some(two_by_one()) };
        let config = ConversionConfig::builder()
            .color_format(ColorFormat::Rgba8888)
            .orientation(Orientation::Deg90)
            .build();
        let pipeline = PngToRawPipeline::with_custom(reader, StandardRawWriter, config);

        let mut output = Vec::new();
        pipeline.convert(b"fake png data", &mut output).unwrap();

        assert_eq!(&output[HEADER_SIZE..], &[5, 6, 7, 8, 1, 2, 3, 4]);
    }

    #[test]
    fn test_set_config() {
        let reader = MockReader { should_fail: false, mock_data: None };
        let mut pipeline = PngToRawPipeline::with_custom(reader, StandardRawWriter, ConversionConfig::default());

        pipeline.set_config(ConversionConfig::builder().color_format(ColorFormat::Rgb565Le).build());

        assert_eq!(pipeline.config().color_format, ColorFormat::Rgb565Le);
    }

    #[test]
    fn test_decode_failure_creates_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.raw");
        std::fs::write(&input, b"not a png").unwrap();

        let pipeline = PngToRawPipeline::new(ConversionConfig::default());
        let result = pipeline.convert_file(&input, &output);

        assert!(matches!(result.unwrap_err(), ConversionError::DecodeError(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.raw");

        let pipeline = PngToRawPipeline::new(ConversionConfig::default());
        let result = pipeline.convert_file(dir.path().join("missing.png"), &output);

        assert!(matches!(result.unwrap_err(), ConversionError::InputReadError(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_unopenable_output_is_sink_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        std::fs::write(&input, b"ignored by mock").unwrap();
        let output = dir.path().join("no_such_dir").join("output.raw");

        let reader = MockReader { should_fail: false, mock_data: None };
        let pipeline = PngToRawPipeline::with_custom(reader, StandardRawWriter, ConversionConfig::default());
        let result = pipeline.convert_file(&input, &output);

        assert!(matches!(result.unwrap_err(), ConversionError::SinkOpenError(_)));
    }

    fn failing_file_conversion(remove_partial_output: bool) -> bool {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.raw");
        std::fs::write(&input, b"ignored by mock").unwrap();

        let reader = MockReader { should_fail: false, mock_data: None };
        let writer = MockWriter { should_fail: true, written_data: Arc::new(Mutex::new(Vec::new())) };
        let config = ConversionConfig::builder()
            .remove_partial_output(remove_partial_output)
            .build();
        let pipeline = PngToRawPipeline::with_custom(reader, writer, config);

        assert!(pipeline.convert_file(&input, &output).is_err());
        output.exists()
    }

    #[test]
    fn test_partial_output_kept_by_default() {
        assert!(failing_file_conversion(false));
    }

    #[test]
    fn test_partial_output_removed_when_configured() {
        assert!(!failing_file_conversion(true));
    }

    /// Passes `remaining` bytes through to the real output, then fails every write.
    struct FailAfter<'a> {
        inner: &'a mut dyn Write,
        remaining: usize,
    }

    impl Write for FailAfter<'_> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.remaining == 0 {
                return Err(std::io::Error::other("No space left on device"));
            }
            let n = self.inner.write(&buf[..buf.len().min(self.remaining)])?;
            self.remaining -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.inner.flush()
        }
    }

    /// Real header and pixel encoding over an output that fills up after `limit` bytes.
    struct FullDiskWriter {
        limit: usize,
    }

    impl RawWriter for FullDiskWriter {
        fn write_raw(&self, image: &RgbaImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<u64> {
            let mut limited = FailAfter { inner: output, remaining: self.limit };
            StandardRawWriter.write_raw(image, &mut limited, config)
        }
    }

    fn full_disk_conversion(remove_partial_output: bool) -> (tempfile::TempDir, std::path::PathBuf, ConversionError) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.raw");
        std::fs::write(&input, b"ignored by mock").unwrap();

        let reader = MockReader { should_fail: false, mock_data: None };
        let writer = FullDiskWriter { limit: HEADER_SIZE + 8 };
        let config = ConversionConfig::builder()
            .color_format(ColorFormat::Argb8888)
            .remove_partial_output(remove_partial_output)
            .build();
        let pipeline = PngToRawPipeline::with_custom(reader, writer, config);

        let err = pipeline.convert_file(&input, &output).unwrap_err();
        (dir, output, err)
    }

    #[test]
    fn test_mid_stream_failure_leaves_truncated_file() {
        let (_dir, output, err) = full_disk_conversion(false);

        assert!(matches!(err, ConversionError::ShortWrite { written, .. } if written == (HEADER_SIZE + 8) as u64));

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE + 8);
        let header = RawHeader::parse(&bytes).unwrap();
        assert_eq!((header.width, header.height), (10, 10));
        assert!(header.file_len() > bytes.len() as u64);
    }

    #[test]
    fn test_mid_stream_failure_removes_truncated_file_when_configured() {
        let (_dir, output, err) = full_disk_conversion(true);

        assert!(matches!(err, ConversionError::ShortWrite { .. }));
        assert!(!output.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_partial_output_cleanup_leaves_non_regular_paths() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        std::fs::write(&input, b"ignored by mock").unwrap();
        let target = dir.path().join("target.raw");
        std::fs::write(&target, b"").unwrap();
        let link = dir.path().join("link.raw");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let reader = MockReader { should_fail: false, mock_data: None };
        let writer = MockWriter { should_fail: true, written_data: Arc::new(Mutex::new(Vec::new())) };
        let config = ConversionConfig::builder()
            .remove_partial_output(true)
            .build();
        let pipeline = PngToRawPipeline::with_custom(reader, writer, config);

        assert!(pipeline.convert_file(&input, &link).is_err());

        let link_type = std::fs::symlink_metadata(&link).unwrap().file_type();
        assert!(link_type.is_symlink());
        assert!(target.exists());
    }
}
