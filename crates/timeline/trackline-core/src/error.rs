//! Error types for timeline configuration.

use thiserror::Error;

use crate::data::MediaType;

/// A time expression chunk that matches neither the clock format (`M:S`,
/// `H:M:S`) nor the unit-suffixed duration format (`5s`, `200ms`, `1.5h`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeFormatError {
    /// Clock chunk split into something other than 2 or 3 parts.
    #[error("invalid clock time '{chunk}': expected M:S or H:M:S, got {segments} segments")]
    ClockSegments { chunk: String, segments: usize },

    /// One of the `:`-separated parts is not a number of the expected shape.
    #[error("invalid clock time '{chunk}': bad {field} field")]
    InvalidClockField { chunk: String, field: &'static str },

    #[error("invalid duration '{chunk}': expected <number>[h|m|s|ms]")]
    InvalidDuration { chunk: String },
}

impl TimeFormatError {
    /// The offending chunk, as written by the author.
    pub fn chunk(&self) -> &str {
        match self {
            Self::ClockSegments { chunk, .. }
            | Self::InvalidClockField { chunk, .. }
            | Self::InvalidDuration { chunk } => chunk,
        }
    }
}

/// Errors produced while assembling a timeline.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimelineError {
    #[error(transparent)]
    Time(#[from] TimeFormatError),

    /// Track invariant `end > start` violated.
    #[error("track range is empty or inverted: start={start} end={end}")]
    InvalidRange { start: f64, end: f64 },

    #[error("{media} track requires a source")]
    MissingSource { media: MediaType },

    /// Field that the track's media type has no use for.
    #[error("{media} track does not take '{field}'")]
    UnexpectedField {
        media: MediaType,
        field: &'static str,
    },

    #[error("timeline json parse error: {0}")]
    Parse(String),
}

impl TimelineError {
    /// Get error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Time(_) => "time",
            Self::InvalidRange { .. }
            | Self::MissingSource { .. }
            | Self::UnexpectedField { .. } => "validation",
            Self::Parse(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Timeline result type
pub type Result<T> = std::result::Result<T, TimelineError>;
