use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::SinkKind;

/// Buffered, line oriented output. Every line gets a trailing `\n`.
pub struct LineSink<W: Write> {
    kind: SinkKind,
    writer: BufWriter<W>,
}

impl LineSink<File> {
    /// Open `path` for appending, creating it if missing
    pub fn append(kind: SinkKind, path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(kind, file))
    }
}

impl<W: Write> LineSink<W> {
    pub fn new(kind: SinkKind, inner: W) -> Self {
        Self {
            kind,
            writer: BufWriter::new(inner),
        }
    }

    pub fn kind(&self) -> SinkKind {
        self.kind
    }

    pub fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)?;
        self.writer.write_all(b"\n")
    }

    /// Writes `<index> <value>`
    pub fn write_record(&mut self, index: i32, value: &str) -> io::Result<()> {
        writeln!(self.writer, "{index} {value}")
    }

    /// Flush buffered lines and hand back the underlying writer
    pub fn finish(self) -> io::Result<W> {
        let mut inner = self.writer.into_inner().map_err(io::IntoInnerError::into_error)?;
        inner.flush()?;
        Ok(inner)
    }
}
