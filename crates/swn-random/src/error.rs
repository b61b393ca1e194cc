//! Error types for swn-random.

use thiserror::Error;

/// Errors raised while generating a null-model graph.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The spec carries a mean degree no Poisson distribution accepts
    /// (negative, NaN, or infinite).
    #[error("invalid random graph spec: {0}")]
    InvalidSpec(String),
}

/// Alias for `Result<T, RandomError>`.
pub type RandomResult<T> = Result<T, RandomError>;
