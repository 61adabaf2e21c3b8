// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sine oscillators for the composite waveform mode.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// One travelling sine component: `amplitude * sin(x*frequency + t*speed + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    /// Spatial frequency in radians per pixel
    pub frequency: f64,
    pub amplitude: f64,
    /// Temporal speed in radians per time unit
    pub speed: f64,
    pub phase: f64,
}

impl Oscillator {
    pub fn sample(&self, x: f64, t: f64) -> f64 {
        self.sample_with_amplitude(x, t, self.amplitude)
    }

    pub fn sample_with_amplitude(&self, x: f64, t: f64, amplitude: f64) -> f64 {
        (x * self.frequency + t * self.speed + self.phase).sin() * amplitude
    }
}

/// Randomized parameters drawn once at startup and held for the process lifetime.
///
/// The sub-waves are fixed fractions of the primary wave, which keeps the composite
/// shape organic without ever looking noisy.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorBank {
    pub primary: Oscillator,
    pub sub_waves: [Oscillator; 2],
    /// Scroll speed in pixels per frame
    pub horizontal_speed: f64,
    pub float_speed: f64,
    pub float_amplitude: f64,
}

impl OscillatorBank {
    /// Draw a bank from a seeded generator. Same seed, same bank.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let frequency = 0.0013 + rng.random::<f64>() * 0.00195;
        let phase = rng.random::<f64>() * TAU;
        let speed = 0.01 + rng.random::<f64>() * 0.02;
        let horizontal_speed = 1.0 + rng.random::<f64>() * 0.5;
        let float_speed = 0.0008 + rng.random::<f64>() * 0.0004;
        let float_amplitude = 30.0 + rng.random::<f64>() * 20.0;
        let base_amplitude = 97.5 + rng.random::<f64>() * 39.0;

        let low = Oscillator {
            frequency: frequency * (0.325 + rng.random::<f64>() * 0.13),
            amplitude: base_amplitude * 0.195,
            speed: speed * 0.7,
            phase: rng.random::<f64>() * TAU,
        };
        let high = Oscillator {
            frequency: frequency * (0.975 + rng.random::<f64>() * 0.195),
            amplitude: base_amplitude * 0.0975,
            speed: speed * 1.3,
            phase: rng.random::<f64>() * TAU,
        };

        Self {
            primary: Oscillator {
                frequency,
                amplitude: base_amplitude,
                speed,
                phase,
            },
            sub_waves: [low, high],
            horizontal_speed,
            float_speed,
            float_amplitude,
        }
    }

    /// Primary wave with `amplitude` overriding its own, plus both sub-waves unchanged.
    pub fn composite(&self, x: f64, t: f64, amplitude: f64) -> f64 {
        self.sub_waves
            .iter()
            .fold(self.primary.sample_with_amplitude(x, t, amplitude), |acc, wave| {
                acc + wave.sample(x, t)
            })
    }

    /// Slow vertical breathing motion shared by all lines.
    pub fn vertical_drift(&self, t: f64) -> f64 {
        (t * self.float_speed).sin() * self.float_amplitude
    }
}
