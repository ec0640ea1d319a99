//! Scanning record boundaries in a byte stream.

extern crate alloc;

use alloc::vec::Vec;

use thiserror::Error;

use crate::source::ByteSource;

/// Errors occurring while scanning a record from a byte source.
#[derive(Debug, Error)]
pub enum ScanError<E> {
    /// A quoted span was still open when the stream ended.
    #[error("A quoted span was still open when the stream ended.")]
    UnterminatedQuote,
    /// An error from the supplied byte source.
    #[error(transparent)]
    Source(E),
}

/// Assembles bytes pulled from a source into successive raw records.
///
/// A record ends at an unquoted line feed or at the end of the stream, so a
/// stream need not end with a trailing newline. The scanner tracks quoting
/// while reading: a line feed inside an open quoted span is stored as data
/// rather than ending the record.
///
/// One internal buffer is reused across scans. A scanner processes one record
/// at a time and is not reentrant.
#[derive(Debug, Default)]
pub struct RecordScanner {
    buffer: Vec<u8>,
}

impl RecordScanner {
    /// Create a scanner with an empty record buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the next raw record from a source.
    ///
    /// Returns the record's bytes, exclusive of the terminating line feed and
    /// of any carriage returns, or `None` once the source is exhausted. The
    /// returned slice borrows the internal buffer and is overwritten by the
    /// next scan.
    ///
    /// Carriage returns are discarded outright, inside quoted spans included,
    /// so LF- and CRLF-terminated input scan identically.
    pub fn scan<S: ByteSource>(
        &mut self,
        source: &mut S,
    ) -> Result<Option<&[u8]>, ScanError<S::Error>> {
        self.buffer.clear();

        let mut in_quotes = false;

        loop {
            let byte = match source.pull() {
                Ok(Some(byte)) => byte,
                Ok(None) => {
                    if in_quotes {
                        return Err(ScanError::UnterminatedQuote);
                    }
                    if self.buffer.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Err(e) => return Err(ScanError::Source(e)),
            };

            match byte {
                b'\r' => continue,
                b'"' => {
                    in_quotes = !in_quotes;
                    self.buffer.push(byte);
                }
                b'\n' if !in_quotes => break,
                _ => self.buffer.push(byte),
            }
        }

        Ok(Some(&self.buffer))
    }
}
