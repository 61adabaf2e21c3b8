// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::info;
use pulsewave_core::SensorReading;
use std::fmt;

/// Connection-level events reported by the ingestion loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorStatus {
    /// Transport attached, waiting for data
    Connected,
    /// A reading was accepted
    Reading(SensorReading),
    /// The transport failed; the loop is about to stop
    Error(String),
    /// The loop stopped (end of stream, failure or cancellation)
    Disconnected,
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected => write!(f, "connected, waiting for data"),
            Self::Reading(reading) => write!(f, "value: {reading}"),
            Self::Error(error) => write!(f, "read error: {error}"),
            Self::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Observer for [`SensorStatus`] updates, typically a status line in the host UI.
///
/// `()` is the no-op sink.
pub trait StatusSink: Send {
    fn on_status(&mut self, status: SensorStatus);
}

impl StatusSink for () {
    fn on_status(&mut self, _status: SensorStatus) {}
}

impl<S: StatusSink + ?Sized> StatusSink for Box<S> {
    fn on_status(&mut self, status: SensorStatus) {
        (**self).on_status(status);
    }
}

/// Status sink that writes every update to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStatusSink;

impl StatusSink for LogStatusSink {
    fn on_status(&mut self, status: SensorStatus) {
        info!("sensor status: {}", status);
    }
}
