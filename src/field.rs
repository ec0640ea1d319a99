//! Splitting a raw record into decoded fields.

extern crate alloc;

use alloc::{string::String, vec::Vec};
use core::str::{self, Utf8Error};

use thiserror::Error;

/// Errors occurring while decoding the fields of a record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A quote opened a span somewhere other than the start of a field.
    #[error("A quote opened a span somewhere other than the start of a field.")]
    MisplacedQuote,
    /// A quoted span was still open at the end of the record.
    #[error("A quoted span was still open at the end of the record.")]
    UnterminatedQuote,
    /// A field held bytes that are not valid UTF-8.
    #[error("A field held bytes that are not valid UTF-8.")]
    Utf8(#[from] Utf8Error),
}

/// Decode a raw record into its fields, in left-to-right order.
///
/// Fields are separated by unquoted commas. A quote may open a quoted span
/// only at the start of a field; inside a span, commas and line feeds are
/// data, a doubled quote decodes to one literal quote, and a lone quote
/// closes the span. The enclosing quotes are not part of the decoded field.
///
/// Decoding is a pure function of the record bytes. A record is never zero
/// fields: the empty record decodes to one empty field, and a trailing comma
/// yields a trailing empty field.
///
/// The record must not hold an unterminated quoted span. The scanner already
/// rejects such records, but decoding re-validates independently.
pub fn decode_fields(record: &[u8]) -> Result<Vec<String>, DecodeError> {
    let mut fields = Vec::new();
    let mut field = Vec::new();

    let mut in_quotes = false;
    let mut bytes = record.iter().copied().peekable();

    while let Some(byte) = bytes.next() {
        if in_quotes {
            match byte {
                b'"' if bytes.peek() == Some(&b'"') => {
                    bytes.next();
                    field.push(b'"');
                }
                b'"' => in_quotes = false,
                _ => field.push(byte),
            }
        } else {
            match byte {
                b',' => fields.push(take_field(&mut field)?),
                b'"' if field.is_empty() => in_quotes = true,
                b'"' => return Err(DecodeError::MisplacedQuote),
                _ => field.push(byte),
            }
        }
    }

    if in_quotes {
        return Err(DecodeError::UnterminatedQuote);
    }

    fields.push(take_field(&mut field)?);

    Ok(fields)
}

/// Drain the field accumulator into an owned string.
fn take_field(field: &mut Vec<u8>) -> Result<String, DecodeError> {
    let text = str::from_utf8(field)?.into();
    field.clear();

    Ok(text)
}
