use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode PNG image: {0}")]
    DecodeError(String),

    #[error("Invalid image dimensions: width={width}, height={height}, buffer={len} bytes")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    #[error("Failed to open output file: {0}")]
    SinkOpenError(String),

    /// `written` counts bytes the output stream accepted. When that stream is
    /// buffered, fewer bytes may have reached the file itself.
    #[error("Short write to output after {written} bytes")]
    ShortWrite {
        written: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
