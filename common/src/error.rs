use std::net::Ipv4Addr;

use thiserror::Error;

/// Errors raised by the consolidation engine.
///
/// Empty input is deliberately absent: an analysis over zero addresses is
/// valid and simply yields an empty frontier, which [`NetfoldError::NoSolution`]
/// then reports when a recommendation is requested.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetfoldError {
    /// An address or CIDR literal reached the engine in a form it cannot parse.
    #[error("invalid address literal '{literal}': {reason}")]
    InvalidInput { literal: String, reason: String },

    /// A missing-address threshold outside of `0..=100`.
    #[error("threshold {0}% is outside of the accepted range 0-100")]
    ThresholdOutOfRange(i64),

    /// A prefix length greater than 32.
    #[error("invalid prefix length /{0}")]
    InvalidPrefix(u8),

    /// A block whose base address has bits set below the prefix boundary.
    #[error("{base} is not aligned to a /{prefix} boundary")]
    Misaligned { base: Ipv4Addr, prefix: u8 },

    /// No frontier member exists to recommend.
    #[error("no consolidation solution available")]
    NoSolution,

    /// The analysis was aborted before every threshold unit ran.
    #[error("analysis cancelled")]
    Cancelled,

    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

impl NetfoldError {
    pub fn invalid_input(literal: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidInput {
            literal: literal.into(),
            reason: reason.to_string(),
        }
    }
}
