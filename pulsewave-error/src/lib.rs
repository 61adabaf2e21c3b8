// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Error types for the PulseWave waveform engine
//!
//! The engine has three failure domains, each with a different blast radius:
//!
//! - [`ParseError`]: a single malformed sensor line. Recovered locally, the line is dropped.
//! - [`PulseWaveError::Transport`]: the sensor byte stream failed or closed. Fatal to the
//!   ingestion loop only; the render loop keeps animating on the last known values.
//! - [`PulseWaveError::Render`]: a single waveform line could not be generated. Contained
//!   to that line for the current frame.
//!
//! # Examples
//!
//! ```
//! use pulsewave_error::{PulseWaveError, Result};
//!
//! fn open_port() -> Result<()> {
//!     Err(PulseWaveError::transport_error("port closed"))
//! }
//!
//! assert!(open_port().unwrap_err().is_fatal());
//! ```

/// Why a sensor line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line did not start with an integer
    #[error("not a number: {line:?}")]
    NotANumber {
        /// The offending line, trimmed
        line: String,
    },

    /// The digits did not fit into the reading type
    #[error("reading overflows: {line:?}")]
    Overflow {
        /// The offending line, trimmed
        line: String,
    },

    /// The value parsed but lies outside the accepted sensor range
    #[error("reading {value} outside accepted range {min}..={max}")]
    OutOfRange {
        /// Parsed value
        value: i64,
        /// Lowest accepted value
        min: i32,
        /// Highest accepted value
        max: i32,
    },
}

/// Root error type for all PulseWave operations
#[derive(Debug, thiserror::Error)]
pub enum PulseWaveError {
    /// A sensor line could not be turned into a reading
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Reading from the sensor transport failed
    ///
    /// Ends the ingestion loop. No reconnect is attempted.
    #[error("Transport error: {context}")]
    Transport {
        /// Description of the failed read
        context: String,
    },

    /// A waveform line could not be generated for the current frame
    #[error("Render error on line {line}: {context}")]
    Render {
        /// Index of the failed line
        line: usize,
        /// What was wrong with it
        context: String,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {context}")]
    Config {
        /// Description of the invalid setting
        context: String,
    },

    /// Custom error from user code
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PulseWaveError {
    /// Create a transport error with the given context
    pub fn transport_error(context: impl Into<String>) -> Self {
        Self::Transport {
            context: context.into(),
        }
    }

    /// Create a render error for one line
    pub fn render_error(line: usize, context: impl Into<String>) -> Self {
        Self::Render {
            line,
            context: context.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::Config {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Errors that only affect one line of input or one line of output.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Render { .. })
    }

    /// Errors that stop the loop that raised them.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Config { .. })
    }
}

impl From<std::io::Error> for PulseWaveError {
    fn from(error: std::io::Error) -> Self {
        Self::Transport {
            context: error.to_string(),
        }
    }
}

/// Specialized Result type for PulseWave operations
///
/// # Examples
///
/// ```
/// use pulsewave_error::Result;
///
/// fn process() -> Result<i32> {
///     Ok(512)
/// }
/// ```
pub type Result<T> = std::result::Result<T, PulseWaveError>;

/// Extension trait for converting foreign errors into `PulseWaveError`
pub trait IntoPulseWaveError {
    /// Convert this error into a `PulseWaveError` with additional context
    fn into_pulsewave_error(self, context: &str) -> PulseWaveError;

    /// Convert this error into a `PulseWaveError` without additional context
    fn into_pulsewave(self) -> PulseWaveError
    where
        Self: Sized,
    {
        self.into_pulsewave_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoPulseWaveError for E {
    fn into_pulsewave_error(self, _context: &str) -> PulseWaveError {
        PulseWaveError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(PulseWaveError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(PulseWaveError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

fn attach(context: String, error: PulseWaveError) -> PulseWaveError {
    match error {
        PulseWaveError::UserError(inner) => PulseWaveError::Transport {
            context: format!("{context}: {inner}"),
        },
        PulseWaveError::Transport { context: inner } => PulseWaveError::Transport {
            context: format!("{context}: {inner}"),
        },
        PulseWaveError::Config { context: inner } => PulseWaveError::Config {
            context: format!("{context}: {inner}"),
        },
        other => other,
    }
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<PulseWaveError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| attach(context.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| attach(f(), e.into()))
    }
}
