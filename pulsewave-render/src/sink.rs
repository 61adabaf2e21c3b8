// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_core::Rgb;

/// A point in canvas coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Handle to an image the host has already loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sprite {
    pub id: String,
}

impl Sprite {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Drawing surface the compositor renders into.
///
/// Mirrors the subset of a 2D canvas context the display needs.
pub trait DrawingSink {
    /// Clear the visible area
    fn clear(&mut self, width: f64, height: f64);

    /// Paint the whole visible area with `color`
    fn fill_background(&mut self, color: Rgb);

    fn set_stroke_style(&mut self, color: Rgb);

    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn stroke(&mut self);

    /// Fill a closed polygon, with a soft glow of radius `glow` around it
    fn fill_polygon(&mut self, points: &[Point], fill: Rgb, glow: f64);

    fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64, width: f64, height: f64);
}

impl<S: DrawingSink + ?Sized> DrawingSink for &mut S {
    fn clear(&mut self, width: f64, height: f64) {
        (**self).clear(width, height);
    }

    fn fill_background(&mut self, color: Rgb) {
        (**self).fill_background(color);
    }

    fn set_stroke_style(&mut self, color: Rgb) {
        (**self).set_stroke_style(color);
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width);
    }

    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y);
    }

    fn stroke(&mut self) {
        (**self).stroke();
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Rgb, glow: f64) {
        (**self).fill_polygon(points, fill, glow);
    }

    fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64, width: f64, height: f64) {
        (**self).draw_image(sprite, x, y, width, height);
    }
}
