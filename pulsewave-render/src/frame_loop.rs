// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The render loop.
//!
//! One task, paced by a [`FrameScheduler`]. Each tick takes a snapshot of the shared
//! sensor state and renders it; it never waits on sensor input, so the animation keeps
//! running after the ingestion loop has stopped.

use crate::logging::{debug, info};
use crate::{DrawingSink, FrameCompositor};
use async_trait::async_trait;
use pulsewave_core::{CancellationToken, SharedSensorState, WaveTask};
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Host-provided pacing for the render loop.
#[async_trait]
pub trait FrameScheduler: Send {
    /// Wait until the next frame is due.
    ///
    /// Returns `false` when the host will not provide any more frames.
    async fn next_frame(&mut self) -> bool;
}

#[async_trait]
impl<F: FrameScheduler + ?Sized> FrameScheduler for Box<F> {
    async fn next_frame(&mut self) -> bool {
        (**self).next_frame().await
    }
}

/// Fixed-rate scheduler on a tokio interval.
///
/// Late frames are skipped rather than bunched up.
#[derive(Debug)]
pub struct IntervalScheduler {
    interval: Interval,
}

impl IntervalScheduler {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis.max(1)))
    }
}

#[async_trait]
impl FrameScheduler for IntervalScheduler {
    async fn next_frame(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Why the render loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLoopStop {
    Cancelled,
    SchedulerEnded,
}

/// Totals over the lifetime of one render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoopSummary {
    pub stopped: FrameLoopStop,
    pub frames: u64,
    pub lines_failed: u64,
    pub overlays: u64,
    pub highlights: u64,
}

/// Render frames until `cancel` fires or the scheduler runs out.
pub async fn run_frame_loop<D, F>(
    mut compositor: FrameCompositor,
    mut sink: D,
    mut scheduler: F,
    state: SharedSensorState,
    cancel: CancellationToken,
) -> FrameLoopSummary
where
    D: DrawingSink,
    F: FrameScheduler,
{
    info!("render loop started");
    let mut frames = 0u64;
    let mut lines_failed = 0u64;
    let mut overlays = 0u64;
    let mut highlights = 0u64;

    let stopped = loop {
        let due = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            due = scheduler.next_frame() => Some(due),
        };

        match due {
            None => break FrameLoopStop::Cancelled,
            Some(false) => break FrameLoopStop::SchedulerEnded,
            Some(true) => {}
        }

        let snapshot = state.snapshot();
        let report = compositor.render_frame(&snapshot, &mut sink);

        frames += 1;
        lines_failed += report.lines_failed as u64;
        overlays += report.overlays as u64;
        highlights += u64::from(report.highlight_drawn);
        debug!("frame {} rendered from reading #{}", frames, snapshot.sequence);
    };

    info!("render loop stopped after {} frames: {:?}", frames, stopped);
    FrameLoopSummary {
        stopped,
        frames,
        lines_failed,
        overlays,
        highlights,
    }
}

/// Spawn the render loop on the tokio runtime.
///
/// Cancelling `cancel` or dropping the returned handle stops the loop.
pub fn spawn_frame_loop<D, F>(
    compositor: FrameCompositor,
    sink: D,
    scheduler: F,
    state: SharedSensorState,
    cancel: CancellationToken,
) -> WaveTask<FrameLoopSummary>
where
    D: DrawingSink + Send + 'static,
    F: FrameScheduler + 'static,
{
    WaveTask::spawn_with_token(cancel, move |token| {
        run_frame_loop(compositor, sink, scheduler, state, token)
    })
}
