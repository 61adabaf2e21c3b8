// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_core::{ReadingRange, SensorReading};
use pulsewave_error::ParseError;
use pulsewave_stream::{parse_reading, StreamLineParser};

const INPUT: &str = "512\n530\r\n  7 \n\nnoise\n1023\n99";

fn split_lines(input: &str) -> Vec<String> {
    let mut parts: Vec<String> = input.split('\n').map(str::to_string).collect();
    // The part after the last terminator is still pending
    parts.pop();
    parts
}

#[test]
fn test_lines_independent_of_chunk_boundaries() {
    let expected = split_lines(INPUT);
    let bytes = INPUT.as_bytes();

    for chunk_size in 1..=bytes.len() {
        let mut parser = StreamLineParser::new();
        let lines: Vec<String> = bytes
            .chunks(chunk_size)
            .flat_map(|chunk| parser.feed(chunk))
            .collect();

        assert_eq!(lines, expected, "chunk size {chunk_size}");
        assert_eq!(parser.flush().as_deref(), Some("99"));
    }
}

#[test]
fn test_every_two_way_split_gives_same_lines() {
    let expected = split_lines(INPUT);
    let bytes = INPUT.as_bytes();

    for at in 0..=bytes.len() {
        let mut parser = StreamLineParser::new();
        let mut lines = parser.feed(&bytes[..at]);
        lines.extend(parser.feed(&bytes[at..]));
        assert_eq!(lines, expected, "split at {at}");
    }
}

#[test]
fn test_fragment_completed_by_later_chunk() {
    let mut parser = StreamLineParser::new();

    assert!(parser.feed(b"51").is_empty());
    assert_eq!(parser.pending_len(), 2);
    assert_eq!(parser.feed(b"2\n"), vec!["512".to_string()]);
    assert_eq!(parser.pending_len(), 0);
    assert_eq!(parser.flush(), None);
}

#[test]
fn test_flush_empties_parser() {
    let mut parser = StreamLineParser::new();
    parser.feed(b"12\n34");

    assert_eq!(parser.flush().as_deref(), Some("34"));
    assert_eq!(parser.flush(), None);
    assert_eq!(parser.feed(b"5\n"), vec!["5".to_string()]);
}

#[test]
fn test_empty_chunk_is_noop() {
    let mut parser = StreamLineParser::new();
    parser.feed(b"4");

    assert!(parser.feed(b"").is_empty());
    assert_eq!(parser.pending_len(), 1);
}

#[test]
fn test_parse_accepts_padded_and_suffixed_numbers() {
    let range = ReadingRange::TEN_BIT;

    assert_eq!(parse_reading("512", range), Ok(SensorReading::new(512)));
    assert_eq!(parse_reading("  0\r", range), Ok(SensorReading::new(0)));
    assert_eq!(parse_reading("+1023", range), Ok(SensorReading::new(1023)));
    assert_eq!(parse_reading("300 raw", range), Ok(SensorReading::new(300)));
    assert_eq!(parse_reading("0042", range), Ok(SensorReading::new(42)));
}

#[test]
fn test_parse_rejects_non_numbers() {
    let range = ReadingRange::TEN_BIT;

    for line in ["", "   ", "abc", "-", "+", "x12", "NaN"] {
        assert!(
            matches!(parse_reading(line, range), Err(ParseError::NotANumber { .. })),
            "{line:?} should not parse"
        );
    }
}

#[test]
fn test_parse_rejects_out_of_range() {
    let range = ReadingRange::TEN_BIT;

    assert_eq!(
        parse_reading("1024", range),
        Err(ParseError::OutOfRange {
            value: 1024,
            min: 0,
            max: 1023
        })
    );
    assert!(matches!(
        parse_reading("-1", range),
        Err(ParseError::OutOfRange { value: -1, .. })
    ));
}

#[test]
fn test_parse_rejects_overflow() {
    let range = ReadingRange::new(i32::MIN, i32::MAX);

    assert!(matches!(
        parse_reading("99999999999999999999999", range),
        Err(ParseError::Overflow { .. })
    ));
    assert!(matches!(
        parse_reading("2147483648", range),
        Err(ParseError::Overflow { .. })
    ));
    assert_eq!(
        parse_reading("-2147483648", range),
        Ok(SensorReading::new(i32::MIN))
    );
}

#[test]
fn test_parse_honours_custom_range() {
    let range = ReadingRange::new(100, 200);

    assert!(parse_reading("150", range).is_ok());
    assert!(parse_reading("99", range).is_err());
    assert!(parse_reading("201", range).is_err());
}
