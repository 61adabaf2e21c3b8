// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use pulsewave_core::{CancellationToken, WaveTask};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_join_returns_loop_output() {
    let task = WaveTask::spawn(|_cancel| async move { 42 });
    assert_eq!(task.join().await, Some(42));
}

#[tokio::test]
async fn test_join_of_panicked_loop_returns_none() {
    let task = WaveTask::spawn(|cancel| async move {
        if !cancel.is_cancelled() {
            panic!("loop failed");
        }
        7_u32
    });
    assert_eq!(task.join().await, None);
}

#[tokio::test]
async fn test_cancel_stops_loop() {
    let ticks = Arc::new(AtomicU32::new(0));
    let ticks_clone = ticks.clone();

    let task = WaveTask::spawn(move |cancel| async move {
        while !cancel.is_cancelled() {
            ticks_clone.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        "stopped"
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    task.cancel();
    assert!(task.is_cancelled());

    let output = tokio::time::timeout(Duration::from_millis(500), task.join()).await;
    assert_eq!(output.expect("loop should stop"), Some("stopped"));
    assert!(ticks.load(Ordering::SeqCst) > 0);
}

#[tokio::test]
async fn test_drop_cancels_token() {
    let external = CancellationToken::new();
    let observer = external.clone();

    let task = WaveTask::spawn_with_token(external, |cancel| async move {
        cancel.cancelled().await;
    });
    assert!(!observer.is_cancelled());

    drop(task);
    assert!(observer.is_cancelled());
}

#[tokio::test]
async fn test_external_token_stops_loop() -> anyhow::Result<()> {
    let external = CancellationToken::new();

    let task = WaveTask::spawn_with_token(external.clone(), |cancel| async move {
        cancel.cancelled().await;
        true
    });

    external.cancel();
    let output = tokio::time::timeout(Duration::from_millis(500), task.join()).await?;
    assert_eq!(output, Some(true));
    Ok(())
}
