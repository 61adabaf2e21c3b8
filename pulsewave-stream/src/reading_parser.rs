// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_core::{ReadingRange, SensorReading};
use pulsewave_error::ParseError;

/// Turn one sensor line into a reading.
///
/// Surrounding whitespace (including a trailing `\r`) is ignored. The line must start
/// with an optionally signed decimal integer; anything after the digits is ignored,
/// which tolerates firmware that appends units or debug text. The value must fit in
/// `range`.
///
/// ```
/// use pulsewave_core::{ReadingRange, SensorReading};
/// use pulsewave_stream::parse_reading;
///
/// let range = ReadingRange::TEN_BIT;
/// assert_eq!(parse_reading(" 512\r", range), Ok(SensorReading::new(512)));
/// assert!(parse_reading("NaN", range).is_err());
/// assert!(parse_reading("4096", range).is_err());
/// ```
///
/// # Errors
/// Returns a [`ParseError`] describing why the line was rejected.
pub fn parse_reading(line: &str, range: ReadingRange) -> Result<SensorReading, ParseError> {
    let trimmed = line.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return Err(ParseError::NotANumber {
            line: trimmed.to_string(),
        });
    }

    let overflow = || ParseError::Overflow {
        line: trimmed.to_string(),
    };

    let magnitude = digits[..digit_count]
        .bytes()
        .try_fold(0_i64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(i64::from(digit - b'0'))
        })
        .ok_or_else(overflow)?;
    let value = if negative { -magnitude } else { magnitude };
    let value = i32::try_from(value).map_err(|_| overflow())?;

    if !range.contains(i64::from(value)) {
        return Err(ParseError::OutOfRange {
            value: i64::from(value),
            min: range.min,
            max: range.max,
        });
    }

    Ok(SensorReading::new(value))
}
