//! Error types for swn-analysis.

use thiserror::Error;

use swn_graph::GraphError;
use swn_metrics::MetricsError;
use swn_random::RandomError;
use swn_records::RecordError;

/// Any failure an analysis procedure can surface.
///
/// Input errors (`Record`, `Graph`) abort a whole run; `Metrics` failures
/// are result-level and, in batch mode, isolated per label.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error(transparent)]
    Random(#[from] RandomError),
}

/// Alias for `Result<T, AnalysisError>`.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
