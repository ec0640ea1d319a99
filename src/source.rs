//! Pull-based byte sources feeding the scanner.

use core::convert::Infallible;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
use std::io::{ErrorKind, Read};

/// A source of bytes, pulled one at a time.
///
/// The decoder performs no buffering of its own beyond the per-record buffer,
/// so a source over an unbuffered transport may be wrapped in a buffered
/// reader externally without changing decoding behavior.
pub trait ByteSource {
    /// An error from the underlying transport.
    type Error;

    /// Pull the next byte, or `None` once the stream is exhausted.
    fn pull(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// A byte source over an in-memory slice.
#[derive(Debug)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
}

impl<'a> SliceSource<'a> {
    /// Create a source reading the slice from its start.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = Infallible;

    fn pull(&mut self) -> Result<Option<u8>, Infallible> {
        Ok(match self.bytes.split_first() {
            Some((byte, rest)) => {
                self.bytes = rest;
                Some(*byte)
            }
            None => None,
        })
    }
}

/// A byte source over a [`std::io::Read`] implementation.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: Read> ReadSource<R> {
    /// Create a source pulling from a reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "std")]
impl<R: Read> ByteSource for ReadSource<R> {
    type Error = std::io::Error;

    fn pull(&mut self) -> Result<Option<u8>, std::io::Error> {
        let mut byte = [0; 1];

        loop {
            return match self.inner.read(&mut byte) {
                Ok(0) => Ok(None),
                Ok(_) => Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => Err(e),
            };
        }
    }
}
