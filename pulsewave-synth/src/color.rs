// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_core::Rgb;
use serde::{Deserialize, Serialize};

/// Time-varying line color cycling through three anchor colors.
///
/// `phase = (t * cycle_rate + index * index_offset) mod 3`; each unit of phase
/// interpolates linearly from one anchor to the next, wrapping from the last back to
/// the first, so the color is continuous in `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorCycler {
    pub stops: [Rgb; 3],
    pub cycle_rate: f64,
    pub index_offset: f64,
}

impl ColorCycler {
    /// Blue, pink, near-white.
    pub const DEFAULT_STOPS: [Rgb; 3] = [
        Rgb::new(0, 160, 255),
        Rgb::new(255, 100, 200),
        Rgb::new(200, 255, 255),
    ];

    pub fn phase(&self, index: usize, t: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let index = index as f64;
        (t * self.cycle_rate + index * self.index_offset).rem_euclid(3.0)
    }

    pub fn color(&self, index: usize, t: f64) -> Rgb {
        let phase = self.phase(index, t);
        // phase < 3.0, but rounding in rem_euclid can land exactly on it
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let segment = (phase.floor() as usize).min(2);
        #[allow(clippy::cast_precision_loss)]
        let p = phase - segment as f64;
        lerp(self.stops[segment], self.stops[(segment + 1) % 3], p)
    }
}

impl Default for ColorCycler {
    fn default() -> Self {
        Self {
            stops: Self::DEFAULT_STOPS,
            cycle_rate: 0.5,
            index_offset: 0.2,
        }
    }
}

fn lerp(from: Rgb, to: Rgb, p: f64) -> Rgb {
    let channel = |a: u8, b: u8| {
        let value = f64::from(a) + (f64::from(b) - f64::from(a)) * p;
        value.floor().clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}
