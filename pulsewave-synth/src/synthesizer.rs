// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{OscillatorBank, PulseShape};
use serde::{Deserialize, Serialize};

/// Which generator produces the line shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveMode {
    /// Primary sine plus two sub-waves, drifting vertically
    Composite,
    /// Piecewise pulse train
    #[default]
    Pulse,
}

/// Per-line parameters, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLineParams {
    pub index: usize,
    pub frequency: f64,
    pub amplitude: f64,
    pub line_width: f64,
}

/// Stateless displacement generator.
///
/// Everything it depends on is passed in or fixed at construction, so the same
/// `(x, t, params)` always yields the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveSynthesizer {
    mode: WaveMode,
    bank: OscillatorBank,
    pulse: PulseShape,
}

impl WaveSynthesizer {
    pub fn new(mode: WaveMode, bank: OscillatorBank, pulse: PulseShape) -> Self {
        Self { mode, bank, pulse }
    }

    pub fn mode(&self) -> WaveMode {
        self.mode
    }

    pub fn bank(&self) -> &OscillatorBank {
        &self.bank
    }

    pub fn pulse(&self) -> &PulseShape {
        &self.pulse
    }

    /// Vertical displacement of pixel `x` at time `t`.
    ///
    /// Composite mode scrolls by adding `offset` to `x` and uses the bank's fixed
    /// frequencies, with `params.amplitude` replacing the primary amplitude. Pulse mode
    /// scrolls through its own time term and ignores `offset`.
    pub fn displacement(&self, x: f64, t: f64, offset: f64, params: &WaveLineParams) -> f64 {
        match self.mode {
            WaveMode::Composite => self.bank.composite(x + offset, t, params.amplitude),
            WaveMode::Pulse => self.pulse.sample(x, t, params.frequency, params.amplitude),
        }
    }

    /// Vertical breathing offset for the whole frame; zero in pulse mode.
    pub fn vertical_drift(&self, t: f64) -> f64 {
        match self.mode {
            WaveMode::Composite => self.bank.vertical_drift(t),
            WaveMode::Pulse => 0.0,
        }
    }

    /// Pixels the scene scrolls per frame.
    pub fn horizontal_speed(&self) -> f64 {
        self.bank.horizontal_speed
    }

    /// Fill `out` with `count` points, one per pixel, each `baseline + displacement`.
    pub fn fill_line(
        &self,
        out: &mut Vec<f64>,
        count: usize,
        t: f64,
        offset: f64,
        baseline: f64,
        params: &WaveLineParams,
    ) {
        out.clear();
        out.reserve(count);
        out.extend((0..count).map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64;
            baseline + self.displacement(x, t, offset, params)
        }));
    }
}
