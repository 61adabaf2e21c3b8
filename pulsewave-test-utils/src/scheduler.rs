// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use pulsewave_render::FrameScheduler;
use std::time::Duration;

/// Scheduler that grants a fixed number of frames, then ends the loop.
///
/// With a pause set, each frame waits that long first, which lets other tasks
/// run between frames.
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    remaining: u64,
    pause: Option<Duration>,
}

impl ManualScheduler {
    pub fn frames(count: u64) -> Self {
        Self {
            remaining: count,
            pause: None,
        }
    }

    /// Frames that never run out; the loop only stops on cancellation.
    pub fn unbounded(pause: Duration) -> Self {
        Self {
            remaining: u64::MAX,
            pause: Some(pause),
        }
    }

    #[must_use]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = Some(pause);
        self
    }
}

#[async_trait]
impl FrameScheduler for ManualScheduler {
    async fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        match self.pause {
            Some(pause) => tokio::time::sleep(pause).await,
            None => tokio::task::yield_now().await,
        }
        true
    }
}
