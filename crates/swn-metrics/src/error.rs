//! Error types for swn-metrics.

use thiserror::Error;

/// A metric was requested on a graph where it has no defined value.
///
/// These are result-level failures, not crashes: batch runs over many
/// labeled inputs report the degenerate label and continue with the rest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    /// Not a single ordered vertex pair is reachable — the average path
    /// length denominator would be zero.
    #[error("degenerate graph: no reachable vertex pairs, average path length is undefined")]
    NoReachablePairs,

    /// The graph has no vertices at all.
    #[error("degenerate graph: no vertices, {metric} is undefined")]
    EmptyGraph { metric: &'static str },
}

/// Alias for `Result<T, MetricsError>`.
pub type MetricsResult<T> = Result<T, MetricsError>;
