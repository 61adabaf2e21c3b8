// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Piecewise pulse-train ("EKG") waveform.
//!
//! One period is a sequence of disjoint segments, each an analytic bump scaled by the
//! line amplitude:
//!
//! ```text
//!  pos:  0    30   50   70   90        150        220
//!        | P  | Q  | R  | S  |    T    |  baseline |
//! ```
//!
//! The default [`PulseShape::ekg`] constants define the look of the display; change
//! them only through configuration.

use pulsewave_error::{PulseWaveError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Shape of one segment, heights relative to the line amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bump {
    /// `height * sin(pi * (pos - start) / (end - start))`
    HalfSine { height: f64 },
    /// `height * exp(-((pos - center) / width)^2)`
    Gaussian { center: f64, width: f64, height: f64 },
}

/// A bump active on `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseSegment {
    pub start: f64,
    pub end: f64,
    pub bump: Bump,
}

impl PulseSegment {
    fn value(&self, pos: f64) -> f64 {
        match self.bump {
            Bump::HalfSine { height } => {
                height * (PI * (pos - self.start) / (self.end - self.start)).sin()
            }
            Bump::Gaussian {
                center,
                width,
                height,
            } => {
                let d = (pos - center) / width;
                height * (-(d * d)).exp()
            }
        }
    }
}

/// Periodic pulse train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseShape {
    pub period: f64,
    /// Phase units the train advances per unit of time
    pub time_scale: f64,
    /// Sorted, non-overlapping segments; positions outside all of them sit on the baseline.
    pub segments: Vec<PulseSegment>,
}

impl PulseShape {
    /// P wave, Q trough, R spike, S trough, T wave, then flat until the next beat.
    pub fn ekg() -> Self {
        Self {
            period: 220.0,
            time_scale: 60.0,
            segments: vec![
                PulseSegment {
                    start: 0.0,
                    end: 30.0,
                    bump: Bump::HalfSine { height: 0.15 },
                },
                PulseSegment {
                    start: 30.0,
                    end: 50.0,
                    bump: Bump::Gaussian {
                        center: 40.0,
                        width: 5.0,
                        height: -0.12,
                    },
                },
                PulseSegment {
                    start: 50.0,
                    end: 70.0,
                    bump: Bump::Gaussian {
                        center: 60.0,
                        width: 3.0,
                        height: 0.7,
                    },
                },
                PulseSegment {
                    start: 70.0,
                    end: 90.0,
                    bump: Bump::Gaussian {
                        center: 80.0,
                        width: 4.0,
                        height: -0.18,
                    },
                },
                PulseSegment {
                    start: 90.0,
                    end: 150.0,
                    bump: Bump::HalfSine { height: 0.25 },
                },
            ],
        }
    }

    /// Position inside the period for pixel `x` at time `t`.
    pub fn position(&self, x: f64, t: f64, frequency: f64) -> f64 {
        (x * frequency + t * self.time_scale).rem_euclid(self.period)
    }

    /// Displacement at a position already reduced into `[0, period)`.
    pub fn value_at(&self, pos: f64, amplitude: f64) -> f64 {
        self.segments
            .iter()
            .find(|segment| pos >= segment.start && pos < segment.end)
            .map_or(0.0, |segment| amplitude * segment.value(pos))
    }

    /// Displacement for pixel `x` at time `t`.
    pub fn sample(&self, x: f64, t: f64, frequency: f64, amplitude: f64) -> f64 {
        self.value_at(self.position(x, t, frequency), amplitude)
    }

    /// Reject shapes that would make `sample` meaningless.
    ///
    /// # Errors
    /// Returns [`PulseWaveError::Config`] naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        if !(self.period.is_finite() && self.period > 0.0) {
            return Err(PulseWaveError::config_error(format!(
                "pulse period must be positive, got {}",
                self.period
            )));
        }
        if !self.time_scale.is_finite() {
            return Err(PulseWaveError::config_error("pulse time_scale must be finite"));
        }

        let mut previous_end = 0.0;
        for (index, segment) in self.segments.iter().enumerate() {
            if !(segment.start >= previous_end
                && segment.start < segment.end
                && segment.end <= self.period)
            {
                return Err(PulseWaveError::config_error(format!(
                    "pulse segment {index} [{}, {}) must be ordered, non-empty and inside the period",
                    segment.start, segment.end
                )));
            }
            if let Bump::Gaussian { width, .. } = segment.bump {
                if !(width.is_finite() && width > 0.0) {
                    return Err(PulseWaveError::config_error(format!(
                        "pulse segment {index} gaussian width must be positive"
                    )));
                }
            }
            previous_end = segment.end;
        }
        Ok(())
    }
}

impl Default for PulseShape {
    fn default() -> Self {
        Self::ekg()
    }
}

#[cfg(test)]
mod tests {
    use super::PulseShape;

    #[test]
    fn segment_boundaries_belong_to_the_next_segment() {
        let shape = PulseShape::ekg();
        // pos 30 is the Q trough's left edge, not the end of the P wave
        let expected = -0.12 * (-(((30.0_f64 - 40.0) / 5.0).powi(2))).exp();
        assert!((shape.value_at(30.0, 1.0) - expected).abs() < 1e-12);
        assert_eq!(shape.value_at(150.0, 1.0), 0.0);
    }

    #[test]
    fn negative_time_wraps_into_period() {
        let shape = PulseShape::ekg();
        let pos = shape.position(0.0, -1.0, 0.0);
        assert!((pos - 160.0).abs() < 1e-9);
    }
}
