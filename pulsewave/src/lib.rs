// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! # PulseWave
//!
//! An animated waveform display driven by a rotary sensor on a serial line.
//!
//! The sensor writes one integer per line (0 to 1023). PulseWave reassembles the
//! lines from the raw byte stream, classifies each reading as stable or rotating,
//! and renders ten layered pulse lines whose amplitude follows the reading. Rotation
//! adds star markers and, above a magnitude of 30, a highlight sprite.
//!
//! ## Architecture
//!
//! Two independent loops share one [`SharedSensorState`]:
//!
//! - **Ingestion** ([`spawn_ingest`]): the only writer. Reads a [`SensorTransport`]
//!   until the stream ends, fails or is cancelled.
//! - **Rendering** ([`spawn_frame_loop`]): the only reader. Draws one frame per
//!   [`FrameScheduler`] tick into a [`DrawingSink`] and never waits for the sensor.
//!
//! [`WaveDisplay`] starts both from a [`PulseWaveConfig`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pulsewave::prelude::*;
//! # struct Canvas;
//! # impl DrawingSink for Canvas {
//! #     fn clear(&mut self, _: f64, _: f64) {}
//! #     fn fill_background(&mut self, _: Rgb) {}
//! #     fn set_stroke_style(&mut self, _: Rgb) {}
//! #     fn set_line_width(&mut self, _: f64) {}
//! #     fn begin_path(&mut self) {}
//! #     fn move_to(&mut self, _: f64, _: f64) {}
//! #     fn line_to(&mut self, _: f64, _: f64) {}
//! #     fn stroke(&mut self) {}
//! #     fn fill_polygon(&mut self, _: &[Point], _: Rgb, _: f64) {}
//! #     fn draw_image(&mut self, _: &Sprite, _: f64, _: f64, _: f64, _: f64) {}
//! # }
//!
//! #[tokio::main]
//! async fn main() -> pulsewave::Result<()> {
//!     let config = PulseWaveConfig::from_toml_str("seed = 1")?;
//!     let port = tokio::io::empty();
//!     let transport = AsyncReadTransport::new(port, &config.ingest.serial);
//!
//!     let display = WaveDisplay::start(
//!         &config,
//!         transport,
//!         LogStatusSink,
//!         Canvas,
//!         IntervalScheduler::from_millis(config.render.frame_interval_ms),
//!     )?;
//!
//!     tokio::time::sleep(std::time::Duration::from_secs(60)).await;
//!     display.shutdown().await;
//!     Ok(())
//! }
//! ```

mod logging;

pub mod config;
pub mod display;

pub use self::config::PulseWaveConfig;
pub use self::display::{DisplayShutdown, WaveDisplay};

pub use pulsewave_core::{
    CancellationToken, MetricsSnapshot, ReadingRange, Rgb, RotationState, SensorReading,
    SensorSnapshot, SharedSensorState, WaveTask,
};
pub use pulsewave_error::{ParseError, PulseWaveError, Result, ResultExt};
pub use pulsewave_render::{
    run_frame_loop, spawn_frame_loop, DrawingSink, FrameCompositor, FrameLoopStop,
    FrameLoopSummary, FrameReport, FrameScheduler, IntervalScheduler, Point, RenderSettings,
    Sprite,
};
pub use pulsewave_stream::{
    spawn_ingest, AsyncReadTransport, ChunkStreamTransport, IngestOutcome, IngestSettings,
    LogStatusSink, SensorStatus, SensorTransport, SerialSettings, StatusSink,
};
pub use pulsewave_synth::{ColorCycler, OscillatorBank, PulseShape, WaveMode};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{PulseWaveConfig, WaveDisplay};
    pub use pulsewave_core::{Rgb, SensorReading, SharedSensorState};
    pub use pulsewave_render::{
        DrawingSink, FrameCompositor, FrameScheduler, IntervalScheduler, Point, Sprite,
    };
    pub use pulsewave_stream::{
        AsyncReadTransport, ChunkStreamTransport, LogStatusSink, SensorStatus, SensorTransport,
        StatusSink,
    };
    pub use pulsewave_synth::WaveMode;
}
