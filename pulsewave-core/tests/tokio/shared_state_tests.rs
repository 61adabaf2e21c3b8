// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use pulsewave_core::{ReadingRange, Rgb, RotationState, SensorReading, SharedSensorState};
use std::time::Duration;

#[test]
fn test_initial_snapshot_is_midpoint_and_stable() {
    let state = SharedSensorState::new();
    let snapshot = state.snapshot();

    assert_eq!(snapshot.latest, SensorReading::new(512));
    assert!(!snapshot.rotation.is_rotating);
    assert_eq!(snapshot.rotation.magnitude, 0);
    assert_eq!(snapshot.rotation.last_value, SensorReading::new(512));
    assert_eq!(snapshot.sequence, 0);
    assert!(!state.is_connected());
}

#[test]
fn test_commit_replaces_whole_snapshot() {
    let state = SharedSensorState::new();
    let rotation = RotationState {
        is_rotating: true,
        magnitude: 18,
        last_value: SensorReading::new(530),
    };

    state.commit(SensorReading::new(530), rotation);
    let snapshot = state.snapshot();

    assert_eq!(snapshot.latest, SensorReading::new(530));
    assert_eq!(snapshot.rotation, rotation);
    assert_eq!(snapshot.sequence, 1);
}

#[test]
fn test_clones_observe_same_state() {
    let writer = SharedSensorState::new();
    let reader = writer.clone();

    writer.commit(SensorReading::new(100), RotationState::stable(SensorReading::new(100)));
    writer.set_connected(true);

    assert_eq!(reader.snapshot().latest, SensorReading::new(100));
    assert!(reader.is_connected());
}

#[test]
fn test_metrics_counts() {
    let state = SharedSensorState::new();
    state.metrics().record_chunk(4);
    state.metrics().record_chunk(6);
    state.metrics().record_accepted();
    state.metrics().record_rejected();
    state.metrics().record_rejected();

    let metrics = state.metrics().snapshot();
    assert_eq!(metrics.chunks_received, 2);
    assert_eq!(metrics.bytes_received, 10);
    assert_eq!(metrics.lines_seen, 3);
    assert_eq!(metrics.readings_accepted, 1);
    assert_eq!(metrics.lines_rejected, 2);
}

#[test]
fn test_rotation_progress_saturates() {
    let mut rotation = RotationState {
        is_rotating: true,
        magnitude: 100,
        last_value: SensorReading::new(0),
    };
    assert!((rotation.progress(200) - 0.5).abs() < f64::EPSILON);

    rotation.magnitude = 900;
    assert!((rotation.progress(200) - 1.0).abs() < f64::EPSILON);

    rotation.is_rotating = false;
    assert!(rotation.progress(200).abs() < f64::EPSILON);
}

#[test]
fn test_reading_range_normalize() {
    let range = ReadingRange::TEN_BIT;
    assert!(range.normalize(SensorReading::new(0)).abs() < f64::EPSILON);
    assert!((range.normalize(SensorReading::new(1023)) - 1.0).abs() < f64::EPSILON);
    assert!(range.contains(1023));
    assert!(!range.contains(1024));
    assert!(!range.contains(-1));
}

#[test]
fn test_color_parsing_and_display() {
    let star: Rgb = "#fff9b0".parse().unwrap();
    assert_eq!(star, Rgb::STAR);
    assert_eq!(star.to_string(), "#fff9b0");
    assert_eq!("#000".parse::<Rgb>().unwrap(), Rgb::BLACK);
    assert_eq!(Rgb::new(0, 160, 255).to_css(), "rgb(0,160,255)");
    assert!("fff9b0".parse::<Rgb>().is_err());
    assert!("#ggg".parse::<Rgb>().is_err());
}

#[tokio::test]
async fn test_reader_never_sees_torn_snapshot() {
    let state = SharedSensorState::new();
    let writer = state.clone();

    let writer_task = tokio::spawn(async move {
        for value in 0..2_000 {
            let reading = SensorReading::new(value);
            writer.commit(reading, RotationState::stable(reading));
            if value % 64 == 0 {
                tokio::task::yield_now().await;
            }
        }
    });

    let reader_task = tokio::spawn(async move {
        for _ in 0..2_000 {
            let snapshot = state.snapshot();
            assert_eq!(snapshot.latest, snapshot.rotation.last_value);
            tokio::task::yield_now().await;
        }
    });

    tokio::time::timeout(Duration::from_secs(5), async {
        writer_task.await.unwrap();
        reader_task.await.unwrap();
    })
    .await
    .unwrap();
}
