// File: crates/pitch-core/src/error.rs
// Summary: Error types; configuration errors are fatal, fetch errors are recoverable.

use thiserror::Error;

/// Construction-time configuration errors. Data problems (non-finite values,
/// empty series, zero-range domains) are not errors anywhere in this crate;
/// they degrade to defined geometric fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("series buffer capacity must be positive")]
    ZeroCapacity,
    #[error("invalid view box: {0}")]
    InvalidViewBox(&'static str),
    #[error("heatmap zone count must be positive")]
    ZeroZoneCount,
}

/// Recoverable failure from a data source. The widget keeps its last-good
/// geometry and surfaces this as a retryable error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("feed request failed: {reason}")]
pub struct FetchError {
    pub reason: String,
}

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}
