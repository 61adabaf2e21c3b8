// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The sensor ingestion loop.
//!
//! Reads chunks from a [`SensorTransport`], reassembles lines, parses readings,
//! classifies rotation and commits each result to the [`SharedSensorState`]. It is the
//! only writer of that state.
//!
//! The loop is fail-stop: end of stream, a failed read, or cancellation end it. The
//! render loop is unaffected and keeps animating on the last committed snapshot.

use crate::logging::{debug, error, info};
use crate::{
    parse_reading, RotationClassifier, SensorStatus, SensorTransport, SerialSettings,
    StatusSink, StreamLineParser, ROTATION_THRESHOLD,
};
use pulsewave_core::{CancellationToken, ReadingRange, SensorSnapshot, SharedSensorState, WaveTask};
use pulsewave_error::Result;
use serde::{Deserialize, Serialize};

/// Sensor-side configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestSettings {
    /// Readings outside this range are rejected as outliers.
    pub range: ReadingRange,
    pub rotation_threshold: u32,
    pub serial: SerialSettings,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            range: ReadingRange::TEN_BIT,
            rotation_threshold: ROTATION_THRESHOLD,
            serial: SerialSettings::default(),
        }
    }
}

/// Why the ingestion loop stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    EndOfStream,
    Cancelled,
}

/// Chunk-to-state pipeline owned by one ingestion loop.
#[derive(Debug)]
pub struct SensorIngest {
    parser: StreamLineParser,
    classifier: RotationClassifier,
    range: ReadingRange,
    state: SharedSensorState,
}

impl SensorIngest {
    /// Build a pipeline writing into `state`, anchored at its current reading.
    pub fn new(state: SharedSensorState, settings: &IngestSettings) -> Self {
        let anchor = state.snapshot().rotation.last_value;
        Self {
            parser: StreamLineParser::new(),
            classifier: RotationClassifier::with_initial(anchor, settings.rotation_threshold),
            range: settings.range,
            state,
        }
    }

    /// Feed one chunk; commit and report every reading it completes.
    ///
    /// Malformed lines are dropped and counted.
    pub fn process_chunk<S>(&mut self, chunk: &[u8], status: &mut S) -> Vec<SensorSnapshot>
    where
        S: StatusSink + ?Sized,
    {
        let metrics = self.state.metrics();
        metrics.record_chunk(chunk.len());

        let mut committed = Vec::new();
        for line in self.parser.feed(chunk) {
            match parse_reading(&line, self.range) {
                Ok(reading) => {
                    metrics.record_accepted();
                    let rotation = self.classifier.observe(reading);
                    committed.push(self.state.commit(reading, rotation));
                    status.on_status(SensorStatus::Reading(reading));
                }
                Err(rejection) => {
                    metrics.record_rejected();
                    debug!("discarding sensor line: {}", rejection);
                }
            }
        }
        committed
    }

    /// Drop an unterminated trailing fragment; it may be a truncated number.
    fn discard_fragment(&mut self) {
        if let Some(fragment) = self.parser.flush() {
            self.state.metrics().record_rejected();
            debug!("discarding unterminated fragment {:?} at end of stream", fragment);
        }
    }

    /// Run until end of stream, transport failure or cancellation.
    ///
    /// # Errors
    /// Returns the transport error that stopped the loop.
    pub async fn run<T, S>(
        mut self,
        mut transport: T,
        mut status: S,
        cancel: CancellationToken,
    ) -> Result<IngestOutcome>
    where
        T: SensorTransport,
        S: StatusSink,
    {
        self.state.set_connected(true);
        status.on_status(SensorStatus::Connected);
        info!("sensor ingestion started");

        let outcome = loop {
            let read = tokio::select! {
                biased;
                () = cancel.cancelled() => None,
                read = transport.read() => Some(read),
            };

            let Some(read) = read else {
                break Ok(IngestOutcome::Cancelled);
            };

            match read {
                Ok(Some(chunk)) => {
                    self.process_chunk(&chunk, &mut status);
                }
                Ok(None) => {
                    self.discard_fragment();
                    break Ok(IngestOutcome::EndOfStream);
                }
                Err(failure) => {
                    error!("sensor transport failed: {}", failure);
                    status.on_status(SensorStatus::Error(failure.to_string()));
                    break Err(failure);
                }
            }
        };

        self.state.set_connected(false);
        status.on_status(SensorStatus::Disconnected);
        info!("sensor ingestion stopped: {:?}", outcome.as_ref().ok());
        outcome
    }
}

/// Spawn the ingestion loop on the tokio runtime.
///
/// Cancelling `cancel` or dropping the returned handle stops the loop.
pub fn spawn_ingest<T, S>(
    state: SharedSensorState,
    settings: &IngestSettings,
    transport: T,
    status: S,
    cancel: CancellationToken,
) -> WaveTask<Result<IngestOutcome>>
where
    T: SensorTransport + 'static,
    S: StatusSink + 'static,
{
    let ingest = SensorIngest::new(state, settings);
    WaveTask::spawn_with_token(cancel, move |token| ingest.run(transport, status, token))
}
