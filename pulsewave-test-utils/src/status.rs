// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulsewave_core::SensorReading;
use pulsewave_stream::{SensorStatus, StatusSink};
use std::sync::Arc;

/// Status sink that keeps every update. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingStatusSink {
    log: Arc<Mutex<Vec<SensorStatus>>>,
}

impl RecordingStatusSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SensorStatus> {
        self.log.lock().clone()
    }

    /// Readings in the order they were reported.
    pub fn readings(&self) -> Vec<SensorReading> {
        self.log
            .lock()
            .iter()
            .filter_map(|status| match status {
                SensorStatus::Reading(reading) => Some(*reading),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<SensorStatus> {
        self.log.lock().last().cloned()
    }
}

impl StatusSink for RecordingStatusSink {
    fn on_status(&mut self, status: SensorStatus) {
        self.log.lock().push(status);
    }
}
