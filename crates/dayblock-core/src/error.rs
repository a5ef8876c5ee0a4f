//! Core error types for dayblock-core.
//!
//! Two disjoint classes of failure exist in this library:
//! - input format/range errors (bad time string, bad date string, out-of-range
//!   minutes) raised immediately at the boundary, and
//! - policy outcomes (suppressed reminder, inactive lazy mode, poor-fit
//!   score), which are plain return values, never errors.
//!
//! Only the first class appears here.

use thiserror::Error;

/// Core error type for dayblock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Time parsing/range errors
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by the `HH:MM` time codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Input does not match `H:MM` / `HH:MM`
    #[error("Invalid time format: '{0}' (expected H:MM or HH:MM)")]
    Format(String),

    /// Hours or minutes component out of range
    #[error("Time out of range: '{input}' (hours 0-23, minutes 0-59)")]
    FieldRange { input: String },

    /// Minutes-since-midnight value out of [0, 1439]
    #[error("Minutes out of range: {0} (expected 0-1439)")]
    MinutesRange(i64),
}

/// Input validation errors for blocks, dates, and timezones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date string does not match `YYYY-MM-DD` or has impossible components
    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Unknown IANA timezone identifier
    #[error("Invalid timezone: '{0}'")]
    InvalidTimezone(String),

    /// End time must be strictly after start time
    #[error("Invalid time range: end ({end}) must be after start ({start})")]
    InvalidTimeRange { start: String, end: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
