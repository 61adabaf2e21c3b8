// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::log_warn;
use crate::overlay::{find_peak, highlight_size, place_markers, star_polygon};
use crate::settings::check_canvas_size;
use crate::{DrawingSink, Point, RenderSettings, Sprite};
use pulsewave_core::{SensorReading, SensorSnapshot};
use pulsewave_error::{PulseWaveError, Result};
use pulsewave_synth::{OscillatorBank, WaveLineParams, WaveSynthesizer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Animation time and scroll position, advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    time: f64,
    horizontal_offset: f64,
}

impl AnimationClock {
    pub const fn starting_at(time: f64) -> Self {
        Self {
            time,
            horizontal_offset: 0.0,
        }
    }

    pub const fn time(&self) -> f64 {
        self.time
    }

    pub const fn horizontal_offset(&self) -> f64 {
        self.horizontal_offset
    }

    fn tick(&mut self, time_step: f64, horizontal_speed: f64) {
        self.time += time_step;
        self.horizontal_offset += horizontal_speed;
    }
}

/// What a single call to [`FrameCompositor::render_frame`] drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub lines_drawn: usize,
    /// Lines skipped because their parameters or points were not finite
    pub lines_failed: usize,
    pub overlays: usize,
    pub highlight_drawn: bool,
}

/// Turns the latest sensor snapshot into one frame of waveform lines.
///
/// Owns the animation clock and the random source for overlays. Sensor state is
/// passed in per frame and only read.
#[derive(Debug)]
pub struct FrameCompositor {
    settings: RenderSettings,
    synth: WaveSynthesizer,
    clock: AnimationClock,
    rng: StdRng,
    highlight: Option<Sprite>,
    points: Vec<f64>,
}

impl FrameCompositor {
    /// Build a compositor whose random wave parameters and start time derive from `seed`.
    ///
    /// # Errors
    /// Returns [`PulseWaveError::Config`] if `settings` fail validation.
    pub fn new(settings: RenderSettings, seed: u64) -> Result<Self> {
        settings.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let bank = OscillatorBank::from_rng(&mut rng);
        let start_time = rng.random::<f64>() * 100.0;
        let synth = WaveSynthesizer::new(settings.mode, bank, settings.pulse.clone());

        Ok(Self {
            points: Vec::with_capacity(settings.point_count()),
            settings,
            synth,
            clock: AnimationClock::starting_at(start_time),
            rng,
            highlight: None,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn synthesizer(&self) -> &WaveSynthesizer {
        &self.synth
    }

    pub fn clock(&self) -> AnimationClock {
        self.clock
    }

    /// Sprite drawn at the peak of the middle line during strong rotation.
    pub fn set_highlight_sprite(&mut self, sprite: Option<Sprite>) {
        self.highlight = sprite;
    }

    /// Adopt a new canvas size; takes effect on the next frame.
    ///
    /// # Errors
    /// Returns [`PulseWaveError::Config`] for a size outside
    /// `0..=`[`crate::MAX_CANVAS_EXTENT`], leaving the previous size in place.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        check_canvas_size(width, height)?;
        self.settings.width = width;
        self.settings.height = height;
        Ok(())
    }

    /// Amplitude the sensor reading maps to, before the per-line fade.
    pub fn mapped_amplitude(&self, latest: SensorReading) -> f64 {
        let s = &self.settings;
        s.amplitude_min + s.reading_range.normalize(latest) * (s.amplitude_max - s.amplitude_min)
    }

    /// Parameters of line `index` for the given reading.
    pub fn line_params(&self, index: usize, latest: SensorReading) -> WaveLineParams {
        let style = &self.settings.line_style;
        let norm = self.settings.reading_range.normalize(latest);
        #[allow(clippy::cast_precision_loss)]
        let i = index as f64;

        WaveLineParams {
            index,
            frequency: style.frequency_base + norm * style.frequency_span + i * style.frequency_step,
            amplitude: self.mapped_amplitude(latest) * (1.0 - i * style.amplitude_fade),
            line_width: (style.width_base - i * style.width_step).max(style.min_width),
        }
    }

    /// Advance the clock one step and draw a full frame for `snapshot` into `sink`.
    ///
    /// A line whose parameters or points are not finite is skipped and counted in
    /// [`FrameReport::lines_failed`]; the rest of the frame is still drawn.
    pub fn render_frame<S>(&mut self, snapshot: &SensorSnapshot, sink: &mut S) -> FrameReport
    where
        S: DrawingSink + ?Sized,
    {
        self.clock
            .tick(self.settings.time_step, self.synth.horizontal_speed());

        let time = self.clock.time();
        let drift = self.synth.vertical_drift(time);
        let progress = snapshot
            .rotation
            .progress(self.settings.rotation_saturation);

        sink.clear(self.settings.width, self.settings.height);
        sink.fill_background(self.settings.background);

        let mut report = FrameReport::default();
        for index in 0..self.settings.line_count {
            let params = self.line_params(index, snapshot.latest);
            let baseline = self.settings.baseline(index) + drift;

            if let Err(error) = self.generate_line(&params, baseline) {
                log_warn!("Skipping line {}: {}", index, error);
                report.lines_failed += 1;
                continue;
            }
            if self.points.len() < 2 {
                continue;
            }

            self.stroke_line(index, &params, sink);
            report.lines_drawn += 1;

            if progress > 0.0 {
                report.overlays += self.draw_markers(progress, sink);
            }
            if index == self.settings.middle_line() && self.draw_highlight(snapshot, sink) {
                report.highlight_drawn = true;
            }
        }
        report
    }

    fn generate_line(&mut self, params: &WaveLineParams, baseline: f64) -> Result<()> {
        let finite = [params.frequency, params.amplitude, params.line_width, baseline]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(PulseWaveError::render_error(
                params.index,
                format!("non-finite parameters {params:?} at baseline {baseline}"),
            ));
        }

        self.synth.fill_line(
            &mut self.points,
            self.settings.point_count(),
            self.clock.time(),
            self.clock.horizontal_offset(),
            baseline,
            params,
        );

        match self.points.iter().position(|y| !y.is_finite()) {
            Some(at) => Err(PulseWaveError::render_error(
                params.index,
                format!("point {at} is not finite"),
            )),
            None => Ok(()),
        }
    }

    fn stroke_line<S>(&self, index: usize, params: &WaveLineParams, sink: &mut S)
    where
        S: DrawingSink + ?Sized,
    {
        let start_x = self.settings.start_x();

        sink.set_stroke_style(self.settings.colors.color(index, self.clock.time()));
        sink.set_line_width(params.line_width);
        sink.begin_path();
        for (i, &y) in self.points.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = start_x + i as f64;
            if i == 0 {
                sink.move_to(x, y);
            } else {
                sink.line_to(x, y);
            }
        }
        sink.stroke();
    }

    fn draw_markers<S>(&mut self, progress: f64, sink: &mut S) -> usize
    where
        S: DrawingSink + ?Sized,
    {
        let start_x = self.settings.start_x();
        let markers = place_markers(&mut self.rng, self.points.len(), progress);

        for marker in &markers {
            #[allow(clippy::cast_precision_loss)]
            let x = start_x + marker.point_index as f64;
            let y = self.points[marker.point_index];
            let star = star_polygon(
                Point::new(x, y - marker.size),
                marker.size,
                marker.inner_radius(),
            );
            sink.fill_polygon(&star, self.settings.overlay_color, marker.glow());
        }
        markers.len()
    }

    fn draw_highlight<S>(&self, snapshot: &SensorSnapshot, sink: &mut S) -> bool
    where
        S: DrawingSink + ?Sized,
    {
        let rotation = snapshot.rotation;
        if !rotation.is_rotating || rotation.magnitude <= self.settings.highlight_magnitude {
            return false;
        }
        let Some(sprite) = &self.highlight else {
            return false;
        };
        let Some(peak) = find_peak(&self.points, self.settings.start_x()) else {
            return false;
        };

        let size = highlight_size(rotation.magnitude);
        sink.draw_image(sprite, peak.x - size / 2.0, peak.y - size, size, size);
        true
    }
}
