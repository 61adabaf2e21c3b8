// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Frame composition and the render loop for PulseWave.
//!
//! [`FrameCompositor`] turns a [`SensorSnapshot`](pulsewave_core::SensorSnapshot) into
//! draw calls on a [`DrawingSink`]. [`run_frame_loop`] drives it once per scheduler tick.

mod logging;

pub mod compositor;
pub mod frame_loop;
pub mod overlay;
pub mod settings;
pub mod sink;

pub use self::compositor::{AnimationClock, FrameCompositor, FrameReport};
pub use self::frame_loop::{
    run_frame_loop, spawn_frame_loop, FrameLoopStop, FrameLoopSummary, FrameScheduler,
    IntervalScheduler,
};
pub use self::overlay::Marker;
pub use self::settings::{LineStyle, RenderSettings, MAX_CANVAS_EXTENT};
pub use self::sink::{DrawingSink, Point, Sprite};
