// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::{anyhow, Result};
use pulsewave_core::{CancellationToken, RotationState, SensorReading, SharedSensorState};
use pulsewave_render::{
    run_frame_loop, spawn_frame_loop, FrameCompositor, FrameLoopStop, IntervalScheduler,
};
use pulsewave_test_utils::{small_canvas, ManualScheduler, RecordingSink};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn test_loop_ends_with_scheduler() -> Result<()> {
    let sink = RecordingSink::new();
    let compositor = FrameCompositor::new(small_canvas(), 1)?;

    let summary = run_frame_loop(
        compositor,
        sink.clone(),
        ManualScheduler::frames(3),
        SharedSensorState::new(),
        CancellationToken::new(),
    )
    .await;

    assert_eq!(summary.stopped, FrameLoopStop::SchedulerEnded);
    assert_eq!(summary.frames, 3);
    assert_eq!(summary.lines_failed, 0);
    assert_eq!(sink.frames(), 3);
    assert_eq!(sink.paths().len(), 30);
    Ok(())
}

#[tokio::test]
async fn test_loop_stops_on_cancel() -> Result<()> {
    let sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    let task = spawn_frame_loop(
        FrameCompositor::new(small_canvas(), 1)?,
        sink.clone(),
        ManualScheduler::unbounded(Duration::from_millis(1)),
        SharedSensorState::new(),
        cancel.clone(),
    );

    sleep(Duration::from_millis(30)).await;
    cancel.cancel();

    let summary = task.join().await.ok_or_else(|| anyhow!("render loop panicked"))?;
    assert_eq!(summary.stopped, FrameLoopStop::Cancelled);
    assert!(summary.frames > 0);
    assert_eq!(usize::try_from(summary.frames)?, sink.frames());
    Ok(())
}

#[tokio::test]
async fn test_cancelled_before_start_draws_nothing() -> Result<()> {
    let sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let summary = run_frame_loop(
        FrameCompositor::new(small_canvas(), 1)?,
        sink.clone(),
        ManualScheduler::frames(10),
        SharedSensorState::new(),
        cancel,
    )
    .await;

    assert_eq!(summary.stopped, FrameLoopStop::Cancelled);
    assert_eq!(summary.frames, 0);
    assert!(sink.commands().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_loop_renders_latest_committed_rotation() -> Result<()> {
    let state = SharedSensorState::new();
    state.commit(
        SensorReading::new(712),
        RotationState {
            is_rotating: true,
            magnitude: 200,
            last_value: SensorReading::new(712),
        },
    );

    let summary = run_frame_loop(
        FrameCompositor::new(small_canvas(), 1)?,
        RecordingSink::new(),
        ManualScheduler::frames(2),
        state,
        CancellationToken::new(),
    )
    .await;

    // At least one star per line per frame
    assert!(summary.overlays >= 20);
    assert_eq!(summary.highlights, 0);
    Ok(())
}

#[tokio::test]
async fn test_dropping_task_cancels_loop() -> Result<()> {
    let sink = RecordingSink::new();
    let task = spawn_frame_loop(
        FrameCompositor::new(small_canvas(), 1)?,
        sink.clone(),
        ManualScheduler::unbounded(Duration::from_millis(1)),
        SharedSensorState::new(),
        CancellationToken::new(),
    );

    sleep(Duration::from_millis(10)).await;
    drop(task);
    sleep(Duration::from_millis(10)).await;

    let frames = sink.frames();
    sleep(Duration::from_millis(20)).await;
    assert_eq!(sink.frames(), frames);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_interval_scheduler_paces_frames() -> Result<()> {
    let sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    let task = spawn_frame_loop(
        FrameCompositor::new(small_canvas(), 1)?,
        sink.clone(),
        IntervalScheduler::from_millis(16),
        SharedSensorState::new(),
        cancel.clone(),
    );

    sleep(Duration::from_millis(100)).await;
    cancel.cancel();
    let summary = task.join().await.ok_or_else(|| anyhow!("render loop panicked"))?;

    // Ticks at 0, 16, 32, 48, 64, 80, 96 ms
    assert!((5..=8).contains(&summary.frames));
    Ok(())
}
