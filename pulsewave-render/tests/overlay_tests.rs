// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_render::overlay::{
    find_peak, highlight_size, place_markers, quintile_bounds, star_polygon, MAX_MARKERS,
    QUINTILES,
};
use pulsewave_render::Point;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn test_no_markers_without_rotation() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(place_markers(&mut rng, 500, 0.0).is_empty());
}

#[test]
fn test_no_markers_on_lines_shorter_than_five_points() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(place_markers(&mut rng, 4, 1.0).is_empty());
}

#[test]
fn test_markers_land_in_distinct_quintiles() {
    let point_count = 503;

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let markers = place_markers(&mut rng, point_count, 1.0);

        assert!((1..=MAX_MARKERS).contains(&markers.len()));
        let quintiles: HashSet<_> = markers.iter().map(|m| m.quintile).collect();
        assert_eq!(quintiles.len(), markers.len());

        for marker in &markers {
            assert!(marker.quintile < QUINTILES);
            let (start, end) = quintile_bounds(point_count, marker.quintile);
            assert!((start..end).contains(&marker.point_index));
            assert!((42.0..50.0).contains(&marker.size));
        }
    }
}

#[test]
fn test_quintiles_cover_every_point() {
    let point_count = 9;
    let mut previous_end = 0;
    for quintile in 0..QUINTILES {
        let (start, end) = quintile_bounds(point_count, quintile);
        assert_eq!(start, previous_end);
        assert!(end > start);
        previous_end = end;
    }
    assert_eq!(previous_end, point_count);
}

#[test]
fn test_markers_reach_tail_of_short_line() {
    let point_count = 9;
    let mut seen = HashSet::new();

    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        for marker in place_markers(&mut rng, point_count, 1.0) {
            assert!(marker.point_index < point_count);
            seen.insert(marker.point_index);
        }
    }

    assert!(seen.iter().any(|&index| index >= 5));
    assert!(seen.contains(&(point_count - 1)));
}

#[test]
fn test_weak_rotation_places_single_small_marker() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let markers = place_markers(&mut rng, 100, 0.05);

        assert_eq!(markers.len(), 1);
        // 12 + 0.05 * 30 + [0, 8)
        assert!((13.5..21.5).contains(&markers[0].size));
    }
}

#[test]
fn test_strong_rotation_eventually_places_three() {
    let counts: HashSet<usize> = (0..200)
        .map(|seed| place_markers(&mut StdRng::seed_from_u64(seed), 100, 1.0).len())
        .collect();
    assert_eq!(counts, HashSet::from([1, 2, 3]));
}

#[test]
fn test_marker_radii() {
    let mut rng = StdRng::seed_from_u64(3);
    let marker = place_markers(&mut rng, 100, 0.5)[0];

    assert_eq!(marker.inner_radius(), marker.size / 2.0);
    assert_eq!(marker.glow(), marker.size * 0.7);
}

#[test]
fn test_star_alternates_outer_and_inner_vertices() {
    let center = Point::new(50.0, 80.0);
    let star = star_polygon(center, 20.0, 10.0);

    for (i, vertex) in star.iter().enumerate() {
        let radius = (vertex.x - center.x).hypot(vertex.y - center.y);
        let expected = if i % 2 == 0 { 20.0 } else { 10.0 };
        assert!((radius - expected).abs() < 1e-9, "vertex {i} at radius {radius}");
    }
}

#[test]
fn test_star_points_up() {
    let star = star_polygon(Point::new(0.0, 0.0), 20.0, 10.0);

    // Third vertex (90 degrees) is straight above the centre on a y-down canvas
    assert!(star[2].x.abs() < 1e-9);
    assert_eq!(star[2].y, -20.0);
}

#[test]
fn test_find_peak_takes_first_largest_y() {
    let points = [1.0, 5.0, 3.0, 5.0];
    assert_eq!(find_peak(&points, -2.0), Some(Point::new(-1.0, 5.0)));
    assert_eq!(find_peak(&[], 0.0), None);
}

#[test]
fn test_highlight_size_saturates() {
    assert_eq!(highlight_size(31), 71.0);
    assert_eq!(highlight_size(100), 140.0);
    assert_eq!(highlight_size(400), 140.0);
}
