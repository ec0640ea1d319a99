//! Record-at-a-time parsing over a byte source.

extern crate alloc;

use alloc::{string::String, vec::Vec};
use core::str;

use thiserror::Error;

use crate::{
    field::{self, DecodeError},
    scan::{RecordScanner, ScanError},
    source::ByteSource,
};

/// Errors occurring while reading a record.
#[derive(Debug, Error)]
pub enum ReadError<E> {
    /// An error scanning the record from the byte source.
    #[error(transparent)]
    Scan(#[from] ScanError<E>),
    /// An error decoding the record's fields.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// An error accessing a field of the current record by position.
#[derive(Debug, Error)]
#[error("Field index {index} is out of range for a record of {count} fields.")]
pub struct IndexError {
    /// The requested index.
    pub index: usize,
    /// The number of fields in the current record.
    pub count: usize,
}

/// A parser reading comma-separated records from a byte source, one per call.
///
/// The parser holds the decoded fields of the most recently read record,
/// queryable by [`field_count`](Self::field_count) and
/// [`field`](Self::field) until the next read. A failed read clears the
/// fields rather than leaving the previous record's values in place.
///
/// A parser is an isolated unit of state: it owns its buffers, reads one
/// record at a time, and performs no retrying of faults on its own.
#[derive(Debug, Default)]
pub struct Parser {
    scanner: RecordScanner,
    fields: Vec<String>,
}

impl Parser {
    /// Create a parser with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and decode the next record from a source.
    ///
    /// Returns the raw record text, exclusive of the terminating newline and
    /// of any carriage returns, or `None` once the source is exhausted. The
    /// returned text borrows the parser's record buffer and is overwritten by
    /// the next read; the decoded fields remain available through
    /// [`field`](Self::field).
    ///
    /// Faults are surfaced to the caller without retry: an unterminated or
    /// misplaced quote leaves the current record unrecoverable, and skipping
    /// ahead or aborting the stream is the caller's choice.
    pub fn read_record<S: ByteSource>(
        &mut self,
        source: &mut S,
    ) -> Result<Option<&str>, ReadError<S::Error>> {
        self.fields.clear();

        let Some(record) = self.scanner.scan(source)? else {
            return Ok(None);
        };

        // Structural bytes are ASCII, so field-level validation makes the
        // whole record valid UTF-8; this conversion cannot fail after a
        // successful decode.
        self.fields = field::decode_fields(record)?;
        let text = str::from_utf8(record).map_err(DecodeError::Utf8)?;

        Ok(Some(text))
    }

    /// The number of fields in the current record.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Retrieve a field of the current record by position.
    ///
    /// The index must be below [`field_count`](Self::field_count); an
    /// out-of-range index fails rather than returning a default.
    pub fn field(&self, index: usize) -> Result<&str, IndexError> {
        self.fields.get(index).map(String::as_str).ok_or(IndexError {
            index,
            count: self.fields.len(),
        })
    }
}
