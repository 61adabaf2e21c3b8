// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types shared by the PulseWave ingestion and render loops.
//!
//! The two loops never talk to each other directly. The ingestion loop is the only
//! writer of a [`SharedSensorState`]; the render loop reads a [`SensorSnapshot`] from
//! it once per frame.

pub mod cancellation_token;
pub mod color;
mod logging;
pub mod metrics;
pub mod reading;
pub mod rotation;
pub mod shared_state;
pub mod wave_task;

pub use self::cancellation_token::CancellationToken;
pub use self::color::Rgb;
pub use self::metrics::{IngestMetrics, MetricsSnapshot};
pub use self::reading::{ReadingRange, SensorReading};
pub use self::rotation::RotationState;
pub use self::shared_state::{SensorSnapshot, SharedSensorState};
pub use self::wave_task::WaveTask;
pub use pulsewave_error::{PulseWaveError, Result};
