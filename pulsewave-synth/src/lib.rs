// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Procedural line synthesis for PulseWave.
//!
//! Pure functions of position, time and per-line parameters. The only randomness is
//! the [`OscillatorBank`], drawn once from an explicit seed.
//!
//! ```
//! use pulsewave_synth::{OscillatorBank, PulseShape, WaveLineParams, WaveMode, WaveSynthesizer};
//!
//! let synth = WaveSynthesizer::new(WaveMode::Pulse, OscillatorBank::from_seed(7), PulseShape::ekg());
//! let params = WaveLineParams { index: 0, frequency: 1.0, amplitude: 100.0, line_width: 1.2 };
//!
//! // R spike centre
//! assert_eq!(synth.displacement(60.0, 0.0, 0.0, &params), 0.7 * 100.0);
//! ```

pub mod color;
pub mod oscillator;
pub mod pulse;
pub mod synthesizer;

pub use self::color::ColorCycler;
pub use self::oscillator::{Oscillator, OscillatorBank};
pub use self::pulse::{Bump, PulseSegment, PulseShape};
pub use self::synthesizer::{WaveLineParams, WaveMode, WaveSynthesizer};
