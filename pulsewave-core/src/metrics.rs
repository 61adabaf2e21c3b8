// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters maintained by the ingestion loop.
///
/// Rejected lines never reach the rotation classifier, so `lines_rejected` is the
/// only trace they leave.
#[derive(Debug, Default)]
pub struct IngestMetrics {
    chunks_received: AtomicU64,
    bytes_received: AtomicU64,
    lines_seen: AtomicU64,
    readings_accepted: AtomicU64,
    lines_rejected: AtomicU64,
}

/// Point-in-time copy of [`IngestMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub chunks_received: u64,
    pub bytes_received: u64,
    pub lines_seen: u64,
    pub readings_accepted: u64,
    pub lines_rejected: u64,
}

impl IngestMetrics {
    pub fn record_chunk(&self, bytes: usize) {
        self.chunks_received.fetch_add(1, Ordering::Relaxed);
        self.bytes_received
            .fetch_add(u64::try_from(bytes).unwrap_or(u64::MAX), Ordering::Relaxed);
    }

    pub fn record_accepted(&self) {
        self.lines_seen.fetch_add(1, Ordering::Relaxed);
        self.readings_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.lines_seen.fetch_add(1, Ordering::Relaxed);
        self.lines_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            chunks_received: self.chunks_received.load(Ordering::Relaxed),
            bytes_received: self.bytes_received.load(Ordering::Relaxed),
            lines_seen: self.lines_seen.load(Ordering::Relaxed),
            readings_accepted: self.readings_accepted.load(Ordering::Relaxed),
            lines_rejected: self.lines_rejected.load(Ordering::Relaxed),
        }
    }
}
