// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Sensor side of PulseWave: from raw serial bytes to a committed rotation state.
//!
//! ```text
//! bytes ─► StreamLineParser ─► parse_reading ─► RotationClassifier ─► SharedSensorState
//! ```
//!
//! [`SensorIngest`] runs these stages as an async loop over a [`SensorTransport`]; the
//! operators in [`operators`] expose the same stages as stream combinators.

pub mod classifier;
pub mod ingest;
pub mod line_parser;
mod logging;
pub mod operators;
pub mod reading_parser;
pub mod status;
pub mod transport;

pub use self::classifier::{RotationClassifier, ROTATION_THRESHOLD};
pub use self::ingest::{spawn_ingest, IngestOutcome, IngestSettings, SensorIngest};
pub use self::line_parser::StreamLineParser;
pub use self::operators::{ClassifyExt, SensorChunkStreamExt};
pub use self::reading_parser::parse_reading;
pub use self::status::{LogStatusSink, SensorStatus, StatusSink};
pub use self::transport::{
    AsyncReadTransport, ChunkStreamTransport, SensorTransport, SerialSettings,
};
