// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use pulsewave_error::{PulseWaveError, Result};
use pulsewave_stream::{ChunkStreamTransport, SensorTransport};
use std::collections::VecDeque;
use std::io;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// One scripted outcome of [`SensorTransport::read`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Chunk(Vec<u8>),
    /// Fail the read with a transport error carrying this text
    Fail(String),
    /// Never complete, like an idle device
    Hang,
}

/// Transport that replays a fixed script, then reports end of stream.
///
/// # Examples
///
/// ```rust
/// use pulsewave_test_utils::ScriptedTransport;
///
/// let transport = ScriptedTransport::from_chunks(["51", "2\n"]);
/// assert_eq!(transport.remaining(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    steps: VecDeque<ScriptStep>,
}

impl ScriptedTransport {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    pub fn from_chunks<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        Self::new(
            chunks
                .into_iter()
                .map(|chunk| ScriptStep::Chunk(chunk.as_ref().to_vec())),
        )
    }

    /// Append a read failure after the scripted chunks.
    #[must_use]
    pub fn then_fail(mut self, message: impl Into<String>) -> Self {
        self.steps.push_back(ScriptStep::Fail(message.into()));
        self
    }

    /// Append a read that never completes after the scripted chunks.
    #[must_use]
    pub fn then_hang(mut self) -> Self {
        self.steps.push_back(ScriptStep::Hang);
        self
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

#[async_trait]
impl SensorTransport for ScriptedTransport {
    async fn read(&mut self) -> Result<Option<Vec<u8>>> {
        match self.steps.pop_front() {
            Some(ScriptStep::Chunk(chunk)) => Ok(Some(chunk)),
            Some(ScriptStep::Fail(message)) => Err(PulseWaveError::transport_error(message)),
            Some(ScriptStep::Hang) => {
                self.steps.push_front(ScriptStep::Hang);
                futures::future::pending().await
            }
            None => Ok(None),
        }
    }
}

/// Sending half of [`sensor_channel`].
///
/// Dropping it ends the stream on the transport side.
#[derive(Debug, Clone)]
pub struct SensorFeed {
    sender: mpsc::UnboundedSender<io::Result<Vec<u8>>>,
}

impl SensorFeed {
    /// Push raw bytes, as if the device had written them.
    ///
    /// # Panics
    /// Panics if the transport has been dropped.
    pub fn push(&self, bytes: impl AsRef<[u8]>) {
        self.sender
            .send(Ok(bytes.as_ref().to_vec()))
            .expect("sensor transport dropped");
    }

    /// Push one newline-terminated reading.
    pub fn push_line(&self, line: impl std::fmt::Display) {
        self.push(format!("{line}\n"));
    }

    /// Make the next read fail.
    ///
    /// # Panics
    /// Panics if the transport has been dropped.
    pub fn fail(&self, message: &str) {
        self.sender
            .send(Err(io::Error::other(message.to_string())))
            .expect("sensor transport dropped");
    }

    pub fn close(self) {
        drop(self.sender);
    }
}

/// Channel-backed transport type returned by [`sensor_channel`].
pub type ChannelTransport = ChunkStreamTransport<UnboundedReceiverStream<io::Result<Vec<u8>>>>;

/// A transport fed from the test body.
pub fn sensor_channel() -> (SensorFeed, ChannelTransport) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let transport = ChunkStreamTransport::new(UnboundedReceiverStream::new(receiver));
    (SensorFeed { sender }, transport)
}
