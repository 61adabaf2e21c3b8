// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_core::{RotationState, SensorReading};
use pulsewave_stream::{RotationClassifier, ROTATION_THRESHOLD};

fn reading(value: i32) -> SensorReading {
    SensorReading::new(value)
}

#[test]
fn test_starts_stable_at_midpoint() {
    let classifier = RotationClassifier::new();

    assert_eq!(classifier.threshold(), ROTATION_THRESHOLD);
    assert_eq!(classifier.state(), RotationState::stable(reading(512)));
}

#[test]
fn test_small_moves_are_stable() {
    for (a, b) in [(512, 512), (512, 522), (522, 512), (0, 10), (1023, 1013)] {
        let mut classifier = RotationClassifier::with_initial(reading(a), 10);
        let state = classifier.observe(reading(b));

        assert!(!state.is_rotating, "{a} -> {b}");
        assert_eq!(state.magnitude, 0);
        assert_eq!(state.last_value, reading(b));
    }
}

#[test]
fn test_large_moves_rotate_with_magnitude() {
    for (a, b) in [(512, 523), (523, 512), (512, 530), (0, 1023), (1023, 0)] {
        let mut classifier = RotationClassifier::with_initial(reading(a), 10);
        let state = classifier.observe(reading(b));

        assert!(state.is_rotating, "{a} -> {b}");
        assert_eq!(state.magnitude, a.abs_diff(b));
        assert_eq!(state.last_value, reading(b));
    }
}

#[test]
fn test_each_reading_compared_with_previous_only() {
    let mut classifier = RotationClassifier::new();

    let states: Vec<RotationState> = [530, 535, 560, 560]
        .into_iter()
        .map(|v| classifier.observe(reading(v)))
        .collect();

    assert_eq!(states[0].magnitude, 18);
    assert!(!states[1].is_rotating);
    assert_eq!(states[2].magnitude, 25);
    assert!(!states[3].is_rotating);
}

#[test]
fn test_no_hysteresis_around_threshold() {
    let mut classifier = RotationClassifier::with_initial(reading(500), 10);

    assert!(classifier.observe(reading(511)).is_rotating);
    assert!(!classifier.observe(reading(501)).is_rotating);
    assert!(classifier.observe(reading(490)).is_rotating);
}
