// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor state handed from the ingestion loop to the render loop.
//!
//! # Discipline
//!
//! - Exactly one writer: the ingestion loop calls [`SharedSensorState::commit`] once per
//!   accepted reading.
//! - Any number of readers, in practice one: the render loop calls
//!   [`SharedSensorState::snapshot`] once per frame.
//!
//! The snapshot is a `Copy` value replaced as a whole under a lock held only for the
//! copy, so a reader sees either the previous reading with its classification or the
//! new one, never a mix. A stale snapshot is acceptable.

use crate::logging::debug;
use crate::{IngestMetrics, RotationState, SensorReading};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Everything the render loop needs from the sensor side for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSnapshot {
    pub latest: SensorReading,
    pub rotation: RotationState,
    /// Number of readings committed so far.
    pub sequence: u64,
}

impl SensorSnapshot {
    pub const fn initial(reading: SensorReading) -> Self {
        Self {
            latest: reading,
            rotation: RotationState::stable(reading),
            sequence: 0,
        }
    }
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self::initial(SensorReading::MIDPOINT)
    }
}

#[derive(Debug)]
struct Inner {
    snapshot: Mutex<SensorSnapshot>,
    metrics: IngestMetrics,
    connected: AtomicBool,
}

/// Cloneable handle to the state shared by both loops.
#[derive(Debug, Clone)]
pub struct SharedSensorState {
    inner: Arc<Inner>,
}

impl SharedSensorState {
    /// State anchored at the sensor mid-scale (512).
    pub fn new() -> Self {
        Self::with_initial(SensorReading::MIDPOINT)
    }

    pub fn with_initial(reading: SensorReading) -> Self {
        Self {
            inner: Arc::new(Inner {
                snapshot: Mutex::new(SensorSnapshot::initial(reading)),
                metrics: IngestMetrics::default(),
                connected: AtomicBool::new(false),
            }),
        }
    }

    /// Publish a reading together with its classification. Writer side only.
    pub fn commit(&self, reading: SensorReading, rotation: RotationState) -> SensorSnapshot {
        let mut guard = self.inner.snapshot.lock();
        let next = SensorSnapshot {
            latest: reading,
            rotation,
            sequence: guard.sequence + 1,
        };
        *guard = next;
        drop(guard);

        debug!(
            "reading {} committed (rotating: {}, magnitude: {})",
            reading, rotation.is_rotating, rotation.magnitude
        );
        next
    }

    /// Copy of the most recently committed state.
    pub fn snapshot(&self) -> SensorSnapshot {
        *self.inner.snapshot.lock()
    }

    pub fn metrics(&self) -> &IngestMetrics {
        &self.inner.metrics
    }

    pub fn set_connected(&self, connected: bool) {
        self.inner.connected.store(connected, Ordering::Release);
    }

    /// Whether an ingestion loop is currently attached to a live transport.
    pub fn is_connected(&self) -> bool {
        self.inner.connected.load(Ordering::Acquire)
    }
}

impl Default for SharedSensorState {
    fn default() -> Self {
        Self::new()
    }
}
