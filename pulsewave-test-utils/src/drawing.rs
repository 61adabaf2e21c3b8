// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulsewave_core::Rgb;
use pulsewave_render::{DrawingSink, Point, Sprite};
use std::sync::Arc;

/// One call made on a [`DrawingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Background(Rgb),
    StrokeStyle(Rgb),
    LineWidth(f64),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    Polygon { points: Vec<Point>, fill: Rgb, glow: f64 },
    Image { sprite: Sprite, x: f64, y: f64, width: f64, height: f64 },
}

/// A stroked path reassembled from the command log.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub color: Option<Rgb>,
    pub width: Option<f64>,
    pub points: Vec<Point>,
}

/// Drawing sink that records every call. Clones share the same log, so a test can
/// keep one while the render loop owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<DrawCommand>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<DrawCommand> {
        self.log.lock().clone()
    }

    pub fn clear_log(&self) {
        self.log.lock().clear();
    }

    /// Number of frames started, counted by `clear` calls.
    pub fn frames(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Clear { .. }))
    }

    pub fn polygons(&self) -> Vec<DrawCommand> {
        self.filtered(|command| matches!(command, DrawCommand::Polygon { .. }))
    }

    pub fn images(&self) -> Vec<DrawCommand> {
        self.filtered(|command| matches!(command, DrawCommand::Image { .. }))
    }

    /// Every stroked path, in drawing order, with the style in effect when it was stroked.
    pub fn paths(&self) -> Vec<StrokedPath> {
        let mut paths = Vec::new();
        let mut color = None;
        let mut width = None;
        let mut current = Vec::new();

        for command in self.log.lock().iter() {
            match command {
                DrawCommand::StrokeStyle(c) => color = Some(*c),
                DrawCommand::LineWidth(w) => width = Some(*w),
                DrawCommand::BeginPath => current.clear(),
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => current.push(*p),
                DrawCommand::Stroke => paths.push(StrokedPath {
                    color,
                    width,
                    points: std::mem::take(&mut current),
                }),
                _ => {}
            }
        }
        paths
    }

    fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.log.lock().iter().filter(|c| predicate(c)).count()
    }

    fn filtered(&self, predicate: impl Fn(&DrawCommand) -> bool) -> Vec<DrawCommand> {
        self.log
            .lock()
            .iter()
            .filter(|c| predicate(c))
            .cloned()
            .collect()
    }

    fn push(&self, command: DrawCommand) {
        self.log.lock().push(command);
    }
}

impl DrawingSink for RecordingSink {
    fn clear(&mut self, width: f64, height: f64) {
        self.push(DrawCommand::Clear { width, height });
    }

    fn fill_background(&mut self, color: Rgb) {
        self.push(DrawCommand::Background(color));
    }

    fn set_stroke_style(&mut self, color: Rgb) {
        self.push(DrawCommand::StrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo(Point::new(x, y)));
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Rgb, glow: f64) {
        self.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
            glow,
        });
    }

    fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCommand::Image {
            sprite: sprite.clone(),
            x,
            y,
            width,
            height,
        });
    }
}
