#![cfg(feature = "std")]

use std::io::{self, Read};

use csv::ReaderBuilder;
use virgule::{Parser, source::ReadSource};

const PATH: &str = "fixtures/mountain-passes.csv";

#[test]
fn decode_fixture_matches_reference() {
    let file = std::fs::File::open(PATH).unwrap();
    let mut source = ReadSource::new(file);
    let mut parser = Parser::new();

    let mut found = Vec::new();
    while parser.read_record(&mut source).unwrap().is_some() {
        let fields: Vec<String> = (0..parser.field_count())
            .map(|i| parser.field(i).unwrap().to_string())
            .collect();
        found.push(fields);
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(PATH)
        .unwrap();

    let expected: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();

    assert_eq!(found, expected);
}

#[test]
fn slice_and_reader_sources_decode_identically() {
    let data = std::fs::read(PATH).unwrap();

    let mut parser = Parser::new();

    let mut slice = virgule::source::SliceSource::new(&data);
    let mut from_slice = Vec::new();
    while let Some(text) = parser.read_record(&mut slice).unwrap() {
        from_slice.push(text.to_string());
    }

    let mut reader = ReadSource::new(&data[..]);
    let mut from_reader = Vec::new();
    while let Some(text) = parser.read_record(&mut reader).unwrap() {
        from_reader.push(text.to_string());
    }

    assert_eq!(from_slice, from_reader);
}

#[test]
fn interrupted_reads_are_retried() {
    struct Flaky {
        data: &'static [u8],
        interrupt: bool,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupt {
                self.interrupt = false;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }

            self.interrupt = true;
            let Some((byte, rest)) = self.data.split_first() else {
                return Ok(0);
            };

            self.data = rest;
            buf[0] = *byte;
            Ok(1)
        }
    }

    let mut source = ReadSource::new(Flaky {
        data: b"a,b\n",
        interrupt: true,
    });

    let mut parser = Parser::new();
    assert_eq!(parser.read_record(&mut source).unwrap(), Some("a,b"));
    assert!(parser.read_record(&mut source).unwrap().is_none());
}

#[test]
fn io_faults_propagate_verbatim() {
    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("connection reset"))
        }
    }

    let mut source = ReadSource::new(Broken);
    let mut parser = Parser::new();

    let err = parser.read_record(&mut source).unwrap_err();
    assert_eq!(err.to_string(), "connection reset");
}
