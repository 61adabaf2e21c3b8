// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_core::{RotationState, SensorReading, SensorSnapshot};
use pulsewave_render::RenderSettings;

/// Snapshot of a knob at rest on `value`.
pub fn stable_snapshot(value: i32) -> SensorSnapshot {
    SensorSnapshot::initial(SensorReading::new(value))
}

/// Snapshot of a knob that just moved from `from` to `to`.
///
/// # Panics
/// Panics if the move is too small to count as rotation.
pub fn rotating_snapshot(from: i32, to: i32) -> SensorSnapshot {
    let magnitude = from.abs_diff(to);
    assert!(magnitude > 10, "{from} -> {to} is not a rotation");
    SensorSnapshot {
        latest: SensorReading::new(to),
        rotation: RotationState {
            is_rotating: true,
            magnitude,
            last_value: SensorReading::new(to),
        },
        sequence: 2,
    }
}

/// 100x110 canvas: 160 points per line, baselines every 10 px.
pub fn small_canvas() -> RenderSettings {
    RenderSettings {
        width: 100.0,
        height: 110.0,
        ..RenderSettings::default()
    }
}
