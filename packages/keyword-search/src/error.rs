//! Typed errors for the keyword search library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can escape an aggregation run.
///
/// Per-pair lookup failures never show up here; they are logged and skipped
/// inside the aggregator.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Input rejected before any lookup was made
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// The caller cancelled the run; partial results were discarded
    #[error("aggregation cancelled")]
    Cancelled,
}

impl AggregateError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}

/// Errors a [`ResultSource`](crate::ResultSource) may return for one
/// (website, keyword) pair.
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Lookup did not finish within the configured timeout
    #[error("lookup timed out after {millis}ms")]
    Timeout { millis: u128 },

    /// The provider answered with an error status
    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The provider answered with a body we could not decode
    #[error("decode error: {0}")]
    Decode(String),

    /// Anything else a source wants to report
    #[error("{0}")]
    Other(String),
}

/// Result type for aggregation.
pub type Result<T> = std::result::Result<T, AggregateError>;
