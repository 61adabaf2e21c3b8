// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Byte sources the ingestion loop can read from.

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use pulsewave_error::{PulseWaveError, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Raw duplex byte stream from the sensor, read side only.
///
/// `read` suspends until data arrives or the stream ends. There is no timeout: a
/// stalled device simply produces no new readings.
#[async_trait]
pub trait SensorTransport: Send {
    /// Next chunk of bytes, `Ok(None)` at end of stream.
    ///
    /// # Errors
    /// Returns [`PulseWaveError::Transport`] when the read fails.
    async fn read(&mut self) -> Result<Option<Vec<u8>>>;
}

#[async_trait]
impl<T: SensorTransport + ?Sized> SensorTransport for Box<T> {
    async fn read(&mut self) -> Result<Option<Vec<u8>>> {
        (**self).read().await
    }
}

/// Settings for callers that open the serial device themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialSettings {
    pub baud_rate: u32,
    /// Size of the buffer handed to each read.
    pub read_buffer: usize,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            read_buffer: 64,
        }
    }
}

/// Adapter for any [`AsyncRead`], such as an opened serial port or a pipe.
#[derive(Debug)]
pub struct AsyncReadTransport<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R> AsyncReadTransport<R> {
    pub fn new(reader: R, settings: &SerialSettings) -> Self {
        Self {
            reader,
            buffer: vec![0; settings.read_buffer.max(1)],
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> SensorTransport for AsyncReadTransport<R> {
    async fn read(&mut self) -> Result<Option<Vec<u8>>> {
        let count = self
            .reader
            .read(&mut self.buffer)
            .await
            .context("reading sensor device")?;

        if count == 0 {
            return Ok(None);
        }
        Ok(Some(self.buffer[..count].to_vec()))
    }
}

/// Adapter for a stream of byte chunks, e.g. a channel fed by a device driver.
#[derive(Debug)]
pub struct ChunkStreamTransport<S> {
    chunks: S,
}

impl<S> ChunkStreamTransport<S> {
    pub fn new(chunks: S) -> Self {
        Self { chunks }
    }
}

#[async_trait]
impl<S> SensorTransport for ChunkStreamTransport<S>
where
    S: Stream<Item = io::Result<Vec<u8>>> + Unpin + Send,
{
    async fn read(&mut self) -> Result<Option<Vec<u8>>> {
        match self.chunks.next().await {
            Some(Ok(chunk)) => Ok(Some(chunk)),
            Some(Err(error)) => Err(PulseWaveError::transport_error(error.to_string())),
            None => Ok(None),
        }
    }
}
