// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_core::Rgb;
use pulsewave_synth::ColorCycler;

const EPS: f64 = 1e-9;

#[test]
fn test_anchor_colors() {
    let cycler = ColorCycler::default();
    // phase = t / 2 for line 0
    assert_eq!(cycler.color(0, 0.0), Rgb::new(0, 160, 255));
    assert_eq!(cycler.color(0, 2.0), Rgb::new(255, 100, 200));
    assert_eq!(cycler.color(0, 4.0), Rgb::new(200, 255, 255));
    assert_eq!(cycler.color(0, 6.0), Rgb::new(0, 160, 255));
}

#[test]
fn test_midpoint_of_first_segment() {
    let cycler = ColorCycler::default();
    assert_eq!(cycler.color(0, 1.0), Rgb::new(127, 130, 227));
}

#[test]
fn test_index_shifts_phase() {
    let cycler = ColorCycler::default();
    // line 5 is one full phase unit ahead of line 0
    assert_eq!(cycler.color(5, 0.0), cycler.color(0, 2.0));
    assert!((cycler.phase(3, 0.0) - 0.6).abs() < EPS);
}

#[test]
fn test_continuity_at_every_boundary() {
    let cycler = ColorCycler::default();
    // phase boundaries 1, 2 and 3 (wrap to 0) for line 0
    for t in [2.0, 4.0, 6.0] {
        let before = cycler.color(0, t - EPS);
        let after = cycler.color(0, t + EPS);
        assert!(
            before.max_channel_delta(after) <= 2,
            "jump at t = {t}: {before} -> {after}"
        );
    }
}

#[test]
fn test_small_time_steps_never_jump() {
    let cycler = ColorCycler::default();
    let mut previous = cycler.color(2, 0.0);
    for frame in 1..2_000 {
        let t = f64::from(frame) * 0.01;
        let current = cycler.color(2, t);
        assert!(previous.max_channel_delta(current) <= 3);
        previous = current;
    }
}

#[test]
fn test_negative_time_wraps() {
    let cycler = ColorCycler::default();
    assert!(cycler.phase(0, -2.0) >= 0.0);
    assert_eq!(cycler.color(0, -6.0), cycler.color(0, 0.0));
}

#[test]
fn test_phase_rounded_up_to_cycle_end_stays_in_last_segment() {
    let cycler = ColorCycler::default();
    // a tiny negative phase wraps to exactly 3.0 after rounding
    let t = -2e-17;
    assert!(cycler.phase(0, t) <= 3.0);
    assert_eq!(cycler.color(0, t), Rgb::new(0, 160, 255));
}
