// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for PulseWave.
//!
//! Stand-ins for the three things a real host provides:
//!
//! - a sensor byte stream: [`ScriptedTransport`] for fixed sequences, [`SensorFeed`]
//!   for chunks pushed from the test body
//! - a drawing surface: [`RecordingSink`] keeps every draw call as a [`DrawCommand`]
//! - frame pacing: [`ManualScheduler`] hands out a fixed number of frames
//!
//! plus [`RecordingStatusSink`] for status updates and small fixtures.
//!
//! Not intended for production code.

pub mod drawing;
pub mod fixtures;
pub mod scheduler;
pub mod status;
pub mod transport;

pub use self::drawing::{DrawCommand, RecordingSink, StrokedPath};
pub use self::fixtures::{rotating_snapshot, small_canvas, stable_snapshot};
pub use self::scheduler::ManualScheduler;
pub use self::status::RecordingStatusSink;
pub use self::transport::{sensor_channel, ScriptStep, ScriptedTransport, SensorFeed};
