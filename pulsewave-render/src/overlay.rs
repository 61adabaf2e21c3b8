// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transient decorations drawn on top of the waveform lines.

use crate::Point;
use rand::Rng;
use std::f64::consts::PI;

/// Number of horizontal bands a line is split into for marker placement.
pub const QUINTILES: usize = 5;

/// Upper bound on markers per line.
pub const MAX_MARKERS: usize = 3;

/// One star marker, generated for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Index into the line's point sequence
    pub point_index: usize,
    /// Quintile the point was drawn from
    pub quintile: usize,
    /// Outer radius of the star
    pub size: f64,
}

impl Marker {
    pub fn inner_radius(&self) -> f64 {
        self.size / 2.0
    }

    pub fn glow(&self) -> f64 {
        self.size * 0.7
    }
}

/// Pick 1..=3 markers for a line of `point_count` points.
///
/// More rotation means more and bigger markers. Every marker sits in a different
/// quintile. Returns nothing when `progress` is not positive or the line is too short
/// to be split.
pub fn place_markers<R: Rng>(rng: &mut R, point_count: usize, progress: f64) -> Vec<Marker> {
    if progress <= 0.0 || point_count < QUINTILES {
        return Vec::new();
    }
    let progress = progress.min(1.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (1 + (rng.random::<f64>() * 3.0 * progress).floor() as usize).min(MAX_MARKERS);

    rand::seq::index::sample(rng, QUINTILES, count)
        .into_iter()
        .map(|quintile| {
            let (start, end) = quintile_bounds(point_count, quintile);
            let point_index = rng.random_range(start..end);
            let size = 12.0 + progress * 30.0 + rng.random::<f64>() * 8.0;
            Marker {
                point_index,
                quintile,
                size,
            }
        })
        .collect()
}

/// Half-open index range of `quintile`; the five ranges tile `0..point_count`.
pub fn quintile_bounds(point_count: usize, quintile: usize) -> (usize, usize) {
    (
        point_count * quintile / QUINTILES,
        point_count * (quintile + 1) / QUINTILES,
    )
}

/// Five-pointed star centred on `center`, alternating outer and inner vertices.
///
/// The first outer vertex sits at 18 degrees, so one point faces straight up.
pub fn star_polygon(center: Point, outer: f64, inner: f64) -> [Point; 10] {
    let vertex = |degrees: f64, radius: f64| {
        let angle = degrees / 180.0 * PI;
        Point::new(
            center.x + angle.cos() * radius,
            center.y - angle.sin() * radius,
        )
    };

    let mut points = [center; 10];
    for i in 0..5 {
        #[allow(clippy::cast_precision_loss)]
        let step = i as f64 * 72.0;
        points[2 * i] = vertex(18.0 + step, outer);
        points[2 * i + 1] = vertex(54.0 + step, inner);
    }
    points
}

/// Point with the largest y (lowest on screen), first one wins on ties.
///
/// `start_x` is the x of the first point; points are one pixel apart.
pub fn find_peak(points: &[f64], start_x: f64) -> Option<Point> {
    let (index, &y) = points
        .iter()
        .enumerate()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })?;

    #[allow(clippy::cast_precision_loss)]
    let x = start_x + index as f64;
    Some(Point::new(x, y))
}

/// Edge length of the highlight sprite for a rotation of `magnitude`.
pub fn highlight_size(magnitude: u32) -> f64 {
    40.0 + f64::from(magnitude.min(100))
}
