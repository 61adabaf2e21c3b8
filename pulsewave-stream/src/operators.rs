// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream operators composing the ingestion stages without shared state.
//!
//! ```
//! use futures::{stream, StreamExt};
//! use pulsewave_core::ReadingRange;
//! use pulsewave_stream::{ClassifyExt, SensorChunkStreamExt};
//!
//! # futures::executor::block_on(async {
//! let chunks = stream::iter(vec![b"51".to_vec(), b"2\n530\n".to_vec()]);
//! let states: Vec<_> = chunks
//!     .sensor_readings(ReadingRange::TEN_BIT)
//!     .classify(10)
//!     .map(|(_, rotation)| rotation.magnitude)
//!     .collect()
//!     .await;
//! assert_eq!(states, vec![0, 18]);
//! # });
//! ```

use crate::{parse_reading, RotationClassifier, StreamLineParser};
use futures::{future, stream, Stream, StreamExt};
use pulsewave_core::{ReadingRange, RotationState, SensorReading};

/// Operators on a stream of raw byte chunks.
pub trait SensorChunkStreamExt<B>: Stream<Item = B> + Sized
where
    B: AsRef<[u8]>,
{
    /// Complete lines, reassembled across chunk boundaries.
    ///
    /// A trailing fragment without terminator is never emitted.
    fn sensor_lines(self) -> impl Stream<Item = String> {
        self.scan(StreamLineParser::new(), |parser, chunk: B| {
            future::ready(Some(stream::iter(parser.feed(chunk.as_ref()))))
        })
        .flatten()
    }

    /// Valid readings; malformed and out-of-range lines are skipped.
    fn sensor_readings(self, range: ReadingRange) -> impl Stream<Item = SensorReading> {
        self.sensor_lines()
            .filter_map(move |line| future::ready(parse_reading(&line, range).ok()))
    }
}

impl<S, B> SensorChunkStreamExt<B> for S
where
    S: Stream<Item = B> + Sized,
    B: AsRef<[u8]>,
{
}

/// Pairs each reading with its rotation classification.
pub trait ClassifyExt: Stream<Item = SensorReading> + Sized {
    /// Classify against the previous reading, starting from the sensor mid-scale.
    fn classify(self, threshold: u32) -> impl Stream<Item = (SensorReading, RotationState)> {
        self.scan(
            RotationClassifier::with_initial(SensorReading::MIDPOINT, threshold),
            |classifier, reading| future::ready(Some((reading, classifier.observe(reading)))),
        )
    }
}

impl<S> ClassifyExt for S where S: Stream<Item = SensorReading> + Sized {}
