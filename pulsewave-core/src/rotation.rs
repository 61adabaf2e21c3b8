// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::SensorReading;

/// Stable/rotating classification derived from two consecutive readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    pub is_rotating: bool,
    /// `|current - previous|` while rotating, 0 otherwise.
    pub magnitude: u32,
    pub last_value: SensorReading,
}

impl RotationState {
    /// Resting state: not rotating, anchored at `last_value`.
    pub const fn stable(last_value: SensorReading) -> Self {
        Self {
            is_rotating: false,
            magnitude: 0,
            last_value,
        }
    }

    /// Rotation intensity in `[0, 1]`, saturating at `saturation`.
    ///
    /// Always 0 while stable.
    pub fn progress(&self, saturation: u32) -> f64 {
        if !self.is_rotating || saturation == 0 {
            return 0.0;
        }
        (f64::from(self.magnitude) / f64::from(saturation)).min(1.0)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::stable(SensorReading::MIDPOINT)
    }
}
