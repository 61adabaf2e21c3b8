// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Spawned background loop with cooperative cancellation.

use crate::logging::log_warn;
use crate::CancellationToken;
use std::future::Future;
use tokio::task::JoinHandle;

/// Handle to a spawned loop (sensor ingestion or frame rendering).
///
/// The spawned future receives a [`CancellationToken`] it must watch. Dropping the
/// handle cancels that token; [`join`](WaveTask::join) waits for the loop to return.
///
/// ```rust
/// use pulsewave_core::WaveTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = WaveTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
///     "stopped"
/// });
///
/// task.cancel();
/// assert_eq!(task.join().await, Some("stopped"));
/// # }
/// ```
#[derive(Debug)]
pub struct WaveTask<T> {
    cancel: CancellationToken,
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> WaveTask<T> {
    /// Spawn a loop on the tokio runtime with a fresh cancellation token.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::spawn_with_token(CancellationToken::new(), f)
    }

    /// Spawn a loop that shares an externally owned cancellation token.
    ///
    /// Cancelling `cancel` from outside stops the loop just like dropping the handle.
    pub fn spawn_with_token<F, Fut>(cancel: CancellationToken, f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let future = f(cancel.clone());
        let handle = tokio::spawn(future);

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Signal the loop to stop. Does not wait for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Check if the loop has already returned.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// The token the loop is watching.
    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Wait for the loop to return its output.
    ///
    /// Returns `None` if the loop panicked or was aborted by the runtime.
    pub async fn join(mut self) -> Option<T> {
        let handle = self.handle.take()?;
        match handle.await {
            Ok(output) => Some(output),
            Err(error) => {
                log_warn!("background loop did not complete: {}", error);
                None
            }
        }
    }
}

impl<T> Drop for WaveTask<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
