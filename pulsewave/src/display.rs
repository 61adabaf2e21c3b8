// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wiring of the two loops that make up a running display.

use crate::logging::info;
use crate::PulseWaveConfig;
use pulsewave_core::{CancellationToken, MetricsSnapshot, SensorSnapshot, SharedSensorState, WaveTask};
use pulsewave_error::Result;
use pulsewave_render::{
    spawn_frame_loop, DrawingSink, FrameCompositor, FrameLoopSummary, FrameScheduler,
};
use pulsewave_stream::{spawn_ingest, IngestOutcome, SensorTransport, StatusSink};

/// How both loops ended, as returned by [`WaveDisplay::shutdown`].
#[derive(Debug)]
pub struct DisplayShutdown {
    /// `None` if the ingestion result was already taken or the loop panicked
    pub ingest: Option<Result<IngestOutcome>>,
    /// `None` if the render loop panicked
    pub render: Option<FrameLoopSummary>,
}

/// A running display: one ingestion loop writing sensor state, one render loop
/// drawing it.
///
/// The loops have separate cancellation tokens. When the sensor stream ends or fails
/// only the ingestion loop stops; the render loop keeps animating the last reading
/// until [`shutdown`](Self::shutdown) or drop.
#[derive(Debug)]
pub struct WaveDisplay {
    state: SharedSensorState,
    ingest: Option<WaveTask<Result<IngestOutcome>>>,
    render: WaveTask<FrameLoopSummary>,
    seed: u64,
}

impl WaveDisplay {
    /// Validate `config` and spawn both loops on the current tokio runtime.
    ///
    /// # Errors
    /// Returns [`PulseWaveError::Config`](pulsewave_error::PulseWaveError::Config) if the
    /// configuration is invalid; nothing is spawned in that case.
    pub fn start<T, S, D, F>(
        config: &PulseWaveConfig,
        transport: T,
        status: S,
        sink: D,
        scheduler: F,
    ) -> Result<Self>
    where
        T: SensorTransport + 'static,
        S: StatusSink + 'static,
        D: DrawingSink + Send + 'static,
        F: FrameScheduler + 'static,
    {
        config.validate()?;

        let seed = config.seed_or_random();
        let mut compositor = FrameCompositor::new(config.render.clone(), seed)?;
        compositor.set_highlight_sprite(config.sprite());

        let state = SharedSensorState::new();
        let ingest = spawn_ingest(
            state.clone(),
            &config.ingest,
            transport,
            status,
            CancellationToken::new(),
        );
        let render = spawn_frame_loop(
            compositor,
            sink,
            scheduler,
            state.clone(),
            CancellationToken::new(),
        );
        info!("display started with seed {}", seed);

        Ok(Self {
            state,
            ingest: Some(ingest),
            render,
            seed,
        })
    }

    /// Seed the wave parameters were drawn from; reuse it to replay the same animation.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &SharedSensorState {
        &self.state
    }

    pub fn snapshot(&self) -> SensorSnapshot {
        self.state.snapshot()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.state.metrics().snapshot()
    }

    /// Whether the ingestion loop is still reading the sensor.
    pub fn is_ingesting(&self) -> bool {
        self.ingest.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn is_rendering(&self) -> bool {
        !self.render.is_finished()
    }

    /// Wait for the sensor stream to end, fail or be cancelled.
    ///
    /// The render loop is left running. Returns `None` once the result has been taken.
    pub async fn wait_ingest(&mut self) -> Option<Result<IngestOutcome>> {
        self.ingest.take()?.join().await
    }

    /// Stop both loops and collect their results.
    pub async fn shutdown(mut self) -> DisplayShutdown {
        if let Some(ingest) = &self.ingest {
            ingest.cancel();
        }
        self.render.cancel();

        let ingest = match self.ingest.take() {
            Some(task) => task.join().await,
            None => None,
        };
        let render = self.render.join().await;
        info!("display stopped");

        DisplayShutdown { ingest, render }
    }
}
