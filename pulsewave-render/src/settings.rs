// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_core::{ReadingRange, Rgb};
use pulsewave_error::{PulseWaveError, Result};
use pulsewave_synth::{ColorCycler, PulseShape, WaveMode};
use serde::{Deserialize, Serialize};

/// Largest canvas width or height accepted, in pixels.
pub const MAX_CANVAS_EXTENT: f64 = 32_768.0;

/// # Errors
/// Returns [`PulseWaveError::Config`] unless both sides are finite, positive and at
/// most [`MAX_CANVAS_EXTENT`].
pub fn check_canvas_size(width: f64, height: f64) -> Result<()> {
    let in_range = |value: f64| value.is_finite() && value > 0.0 && value <= MAX_CANVAS_EXTENT;
    if in_range(width) && in_range(height) {
        Ok(())
    } else {
        Err(PulseWaveError::config_error(format!(
            "canvas size must be within 0..={MAX_CANVAS_EXTENT}, got {width}x{height}"
        )))
    }
}

/// How a line's frequency, amplitude and width follow its index and the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub frequency_base: f64,
    /// Added at full sensor deflection
    pub frequency_span: f64,
    /// Added per line index
    pub frequency_step: f64,
    /// Fraction of amplitude lost per line index
    pub amplitude_fade: f64,
    pub width_base: f64,
    pub width_step: f64,
    pub min_width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            frequency_base: 0.012,
            frequency_span: 0.018,
            frequency_step: 0.0015,
            amplitude_fade: 0.03,
            width_base: 1.2,
            width_step: 0.045,
            min_width: 0.2,
        }
    }
}

/// Everything the compositor needs to turn sensor state into frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub mode: WaveMode,
    pub line_count: usize,
    /// Fraction of the width drawn past each edge
    pub extension_factor: f64,
    /// Clock advance per frame
    pub time_step: f64,
    pub amplitude_min: f64,
    pub amplitude_max: f64,
    pub reading_range: ReadingRange,
    /// Magnitude at which overlays reach full intensity
    pub rotation_saturation: u32,
    /// Magnitude above which the highlight sprite appears
    pub highlight_magnitude: u32,
    pub background: Rgb,
    pub overlay_color: Rgb,
    pub frame_interval_ms: u64,
    pub line_style: LineStyle,
    pub colors: ColorCycler,
    pub pulse: PulseShape,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            mode: WaveMode::Pulse,
            line_count: 10,
            extension_factor: 0.3,
            time_step: 0.01,
            amplitude_min: 40.0,
            amplitude_max: 100.0,
            reading_range: ReadingRange::TEN_BIT,
            rotation_saturation: 200,
            highlight_magnitude: 30,
            background: Rgb::BLACK,
            overlay_color: Rgb::STAR,
            frame_interval_ms: 16,
            line_style: LineStyle::default(),
            colors: ColorCycler::default(),
            pulse: PulseShape::ekg(),
        }
    }
}

impl RenderSettings {
    /// Points per line: one per pixel across the extended width.
    pub fn point_count(&self) -> usize {
        let extended = (self.width * (1.0 + 2.0 * self.extension_factor)).ceil();
        if extended.is_finite() && extended > 0.0 {
            extended as usize
        } else {
            0
        }
    }

    /// X coordinate of the first point, left of the visible area.
    pub fn start_x(&self) -> f64 {
        -self.width * self.extension_factor
    }

    /// Resting y of line `index`; lines are spread evenly with equal margins.
    pub fn baseline(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let (slot, slots) = ((index + 1) as f64, (self.line_count + 1) as f64);
        self.height * slot / slots
    }

    /// Index of the line that may carry the highlight sprite.
    pub fn middle_line(&self) -> usize {
        self.line_count / 2
    }

    /// # Errors
    /// Returns [`PulseWaveError::Config`] for the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(PulseWaveError::config_error(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        };

        positive("width", self.width)?;
        positive("height", self.height)?;
        check_canvas_size(self.width, self.height)?;
        positive("time_step", self.time_step)?;
        if !(self.extension_factor.is_finite() && self.extension_factor >= 0.0) {
            return Err(PulseWaveError::config_error(
                "extension_factor must be zero or positive",
            ));
        }
        if self.line_count == 0 {
            return Err(PulseWaveError::config_error("line_count must be at least 1"));
        }
        if !(self.amplitude_min.is_finite()
            && self.amplitude_max.is_finite()
            && self.amplitude_min <= self.amplitude_max)
        {
            return Err(PulseWaveError::config_error(
                "amplitude_min must not exceed amplitude_max",
            ));
        }
        if self.reading_range.min >= self.reading_range.max {
            return Err(PulseWaveError::config_error("reading_range must not be empty"));
        }
        if self.rotation_saturation == 0 {
            return Err(PulseWaveError::config_error(
                "rotation_saturation must be at least 1",
            ));
        }
        self.pulse.validate()
    }
}
