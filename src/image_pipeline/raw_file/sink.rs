//! Output sink that turns any failed or short write into `ShortWrite`.

use std::io::Write;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Wraps the output stream and tracks how many bytes it has accepted.
pub struct RawSink<'a> {
    inner: &'a mut dyn Write,
    written: u64,
}

impl<'a> RawSink<'a> {
    pub fn new(inner: &'a mut dyn Write) -> Self {
        Self { inner, written: 0 }
    }

    /// Appends `bytes` in full or fails. No retry beyond what `write_all` does
    /// for interrupted writes.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let mut remaining = bytes;
        while !remaining.is_empty() {
            match self.inner.write(remaining) {
                Ok(0) => {
                    return Err(self.short_write(std::io::Error::new(
                        std::io::ErrorKind::WriteZero,
                        format!("sink accepted {} of {} bytes", bytes.len() - remaining.len(), bytes.len()),
                    )));
                }
                Ok(n) => {
                    self.written += n as u64;
                    remaining = &remaining[n..];
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(self.short_write(e)),
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(|e| self.short_write(e))
    }

    /// Bytes accepted by the wrapped stream so far. For a `BufWriter` this
    /// includes bytes still held in its buffer.
    pub fn written(&self) -> u64 {
        self.written
    }

    fn short_write(&self, source: std::io::Error) -> ConversionError {
        ConversionError::ShortWrite {
            written: self.written,
            source,
        }
    }
}
