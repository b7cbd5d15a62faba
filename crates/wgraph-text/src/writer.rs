//! Writing graph files.

use crate::error::Result;
use crate::record::{Header, Record};
use std::io::{BufWriter, Write};

/// Buffered writer for the adjacency-list text format.
///
/// Every header or record is written as one line terminated by `\n`.
///
/// # Examples
///
/// ```
/// use wgraph_text::{Header, Record, TextWriter};
///
/// let mut writer = TextWriter::new(Vec::new());
/// writer.write_header(Header::new(2, 1)).unwrap();
/// writer.write_record(&Record::Edge { source: 0, target: 1, cost: 3 }).unwrap();
/// let bytes = writer.into_inner().unwrap();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "2 1\n0 1 3\n");
/// ```
pub struct TextWriter<W: Write> {
    writer: BufWriter<W>,
    records_written: usize,
}

impl<W: Write> TextWriter<W> {
    /// Creates a new `TextWriter` wrapping the given writer in a [`BufWriter`].
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            records_written: 0,
        }
    }

    /// Writes the header line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn write_header(&mut self, header: Header) -> Result<()> {
        writeln!(self.writer, "{header}")?;
        Ok(())
    }

    /// Writes one body record.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.writer, "{record}")?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of body records written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flushes buffered output to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::Error::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_writer_has_written_nothing() {
        let writer = TextWriter::new(Vec::new());
        assert_eq!(writer.records_written(), 0);
    }

    #[test]
    fn records_are_newline_terminated() {
        let mut writer = TextWriter::new(Vec::new());
        writer.write_header(Header::new(1, 0)).unwrap();
        writer.write_record(&Record::Vertex(0)).unwrap();
        assert_eq!(writer.records_written(), 1);

        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "1 0\n0\n");
    }
}
