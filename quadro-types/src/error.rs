use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Source;

/// Unified error type for the quadro workspace.
///
/// This covers catalog misses, provider-tagged transport failures, timeouts,
/// payload problems, and argument validation errors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuadroError {
    /// A series or resource could not be found. Expected when callers probe
    /// several candidate identifiers.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series UNRATE".
        what: String,
    },

    /// A backing data source failed at the transport or API level.
    ///
    /// The field is `origin`, not `source`: thiserror reserves `source`
    /// for error chaining.
    #[error("{origin} unavailable: {msg}")]
    Source {
        /// Source that failed.
        origin: Source,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {origin}")]
    SourceTimeout {
        /// Source that timed out.
        origin: Source,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl QuadroError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Source` error with the source tag and message.
    pub fn source(origin: Source, msg: impl Into<String>) -> Self {
        Self::Source {
            origin,
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    #[must_use]
    pub const fn source_timeout(origin: Source) -> Self {
        Self::SourceTimeout { origin }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// `NotFound` is benign: callers probing candidate identifiers treat it as
    /// an expected outcome, not a failure.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}
