// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_core::{RotationState, SensorReading};

/// Readings must differ by more than this to count as rotation.
pub const ROTATION_THRESHOLD: u32 = 10;

/// Single-sample rotation detector.
///
/// Compares each reading with the previous one. There is no smoothing: one noisy
/// sample can flip the state.
///
/// ```
/// use pulsewave_core::SensorReading;
/// use pulsewave_stream::RotationClassifier;
///
/// let mut classifier = RotationClassifier::new();
/// let state = classifier.observe(SensorReading::new(530));
/// assert!(state.is_rotating);
/// assert_eq!(state.magnitude, 18);
/// ```
#[derive(Debug, Clone)]
pub struct RotationClassifier {
    threshold: u32,
    state: RotationState,
}

impl RotationClassifier {
    /// Classifier anchored at the sensor mid-scale with the default threshold.
    pub fn new() -> Self {
        Self::with_initial(SensorReading::MIDPOINT, ROTATION_THRESHOLD)
    }

    pub fn with_initial(last_value: SensorReading, threshold: u32) -> Self {
        Self {
            threshold,
            state: RotationState::stable(last_value),
        }
    }

    /// Classify `reading` against the previous one and remember it.
    pub fn observe(&mut self, reading: SensorReading) -> RotationState {
        let delta = reading.value().abs_diff(self.state.last_value.value());

        self.state = if delta > self.threshold {
            RotationState {
                is_rotating: true,
                magnitude: delta,
                last_value: reading,
            }
        } else {
            RotationState::stable(reading)
        };
        self.state
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for RotationClassifier {
    fn default() -> Self {
        Self::new()
    }
}
