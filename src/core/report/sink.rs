//! Report sinks

use crate::domain::{PiiScoutError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Destination for an ordered stream of report lines
pub trait ReportSink {
    /// Appends `text` followed by a newline
    ///
    /// `text` may itself contain newlines.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying destination cannot be written.
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Flushes buffered output
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying destination cannot be written.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sink over any [`Write`] implementation
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)
            .map_err(|e| PiiScoutError::Report(format!("Failed to write report: {}", e)))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| PiiScoutError::Report(format!("Failed to flush report: {}", e)))
    }
}

impl ReportSink for Vec<String> {
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}

/// Buffered file sink; an existing file is truncated
pub type FileSink = WriterSink<BufWriter<File>>;

impl FileSink {
    /// Creates (or truncates) the report file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            PiiScoutError::Report(format!(
                "Failed to create report file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(WriterSink::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writer_sink_appends_newlines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("a").unwrap();
        sink.write_line("b\nc").unwrap();
        sink.write_line("").unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "a\nb\nc\n\n");
    }

    #[test]
    fn test_file_sink_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");
        std::fs::write(&path, "stale contents that are longer\n").unwrap();

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_line("fresh").unwrap();
        sink.flush().unwrap();
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.txt");

        let err = FileSink::create(&path).unwrap_err();
        assert!(matches!(err, PiiScoutError::Report(_)));
    }
}
