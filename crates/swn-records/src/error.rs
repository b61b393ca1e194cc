//! Error types for swn-records.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading per-process dump files.
///
/// Both variants are fatal by contract: a run over malformed input produces
/// no partial report.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON, or lacks a required top-level field
    /// (most importantly `agents`).
    #[error("malformed dump file {}: {reason}", path.display())]
    Malformed {
        path:   PathBuf,
        reason: String,
    },
}

/// Alias for `Result<T, RecordError>`.
pub type RecordResult<T> = Result<T, RecordError>;
