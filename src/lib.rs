#![no_std]

//! A streaming decoder for comma-separated text records.
//!
//! Virgule reads delimited records from a byte stream one at a time, decoding
//! each into an ordered list of fields. Quoted fields may hold embedded
//! commas, newlines, and doubled-quote escapes; carriage returns are stripped
//! so that LF- and CRLF-terminated input decode identically.
//!
//! Decoding runs in two stages, exposed separately for applications needing
//! finer control: the [`scan`] module finds record boundaries in a byte
//! stream, honoring quoting so a newline inside a quoted span is data rather
//! than a terminator, and the [`field`] module splits one raw record into its
//! fields. Most users should begin with [`Parser`], which drives both stages
//! and holds the decoded fields of the most recent record for access by
//! position.
//!
//! Bytes are pulled through the [`source::ByteSource`] capability, so the
//! decoder is reusable over any transport. Sources over in-memory slices and
//! `std::io::Read` implementations are provided.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable the reader-backed byte source (default).

pub mod field;
pub mod parser;
pub mod scan;
pub mod source;

pub use parser::Parser;
