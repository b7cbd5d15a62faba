//! Reading graph files line by line.
//!
//! [`TextReader`] wraps any [`BufRead`] and tracks the current line number so
//! that parse failures can point at the offending line.

use crate::error::{Error, Result};
use crate::record::{Header, Record};
use std::io::BufRead;

/// Buffered reader for the adjacency-list text format.
///
/// Call [`read_header`](Self::read_header) once, then drain body records with
/// [`read_record`](Self::read_record) or by iterating the reader.
///
/// # Examples
///
/// ```
/// use wgraph_text::{Header, Record, TextReader};
///
/// let data = "2 1\n0 1 5\n";
/// let mut reader = TextReader::new(data.as_bytes());
/// assert_eq!(reader.read_header().unwrap(), Header::new(2, 1));
/// assert_eq!(
///     reader.read_record().unwrap(),
///     Some(Record::Edge { source: 0, target: 1, cost: 5 })
/// );
/// assert_eq!(reader.read_record().unwrap(), None);
/// ```
pub struct TextReader<R> {
    reader: R,
    /// 1-based number of the last line read, 0 before any read.
    line_number: usize,
    buffer: String,
}

impl<R: BufRead> TextReader<R> {
    /// Creates a new `TextReader` over an already-buffered reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Returns the 1-based number of the last line read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads and parses the header line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingHeader`] on empty input and
    /// [`Error::InvalidFormat`] if the first line is not two counts.
    pub fn read_header(&mut self) -> Result<Header> {
        let Some(line) = self.next_line()? else {
            return Err(Error::MissingHeader);
        };
        line.parse().map_err(|reason| Error::InvalidFormat {
            line_number: self.line_number,
            reason,
        })
    }

    /// Reads the next body record, skipping blank lines.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] for a line that is neither an edge
    /// nor a vertex, and [`Error::Io`] if the underlying read fails.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        loop {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                tracing::trace!(line_number = self.line_number, "Skipping blank line");
                continue;
            }
            return line
                .parse()
                .map(Some)
                .map_err(|reason| Error::InvalidFormat {
                    line_number: self.line_number,
                    reason,
                });
        }
    }

    /// Consumes the reader, returning the underlying reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        let read = self.reader.read_line(&mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.buffer.trim_end().to_string()))
    }
}

impl<R: BufRead> Iterator for TextReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
