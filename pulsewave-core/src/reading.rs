// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed sensor value (a 10-bit ADC sample from the rotation sensor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SensorReading(i32);

impl SensorReading {
    /// Mid-scale value assumed before the first reading arrives.
    pub const MIDPOINT: Self = Self(512);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for SensorReading {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl From<i32> for SensorReading {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of values accepted from the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRange {
    pub min: i32,
    pub max: i32,
}

impl ReadingRange {
    /// Observed domain of the 10-bit rotation sensor.
    pub const TEN_BIT: Self = Self { min: 0, max: 1023 };

    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min as i64 && value <= self.max as i64
    }

    /// Position of `reading` inside the range, 0.0 at `min`, 1.0 at `max`.
    ///
    /// Not clamped. A degenerate range maps everything to 0.0.
    pub fn normalize(&self, reading: SensorReading) -> f64 {
        let span = f64::from(self.max) - f64::from(self.min);
        if span <= 0.0 {
            return 0.0;
        }
        (f64::from(reading.value()) - f64::from(self.min)) / span
    }
}

impl Default for ReadingRange {
    fn default() -> Self {
        Self::TEN_BIT
    }
}
