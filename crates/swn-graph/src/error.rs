//! Error types for swn-graph.

use std::path::PathBuf;

use thiserror::Error;

use swn_core::AgentId;

/// Input-consistency errors raised during the merge.  Both are fatal: a
/// graph missing vertices or carrying ambiguous identities would silently
/// skew every downstream statistic.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge references an id never declared as a vertex in any dump.
    #[error(
        "unknown agent {id}: referenced by agent {referenced_by} in {} but never declared",
        file.display()
    )]
    UnknownVertex {
        id:            AgentId,
        referenced_by: AgentId,
        file:          PathBuf,
    },

    /// The same global id appears as a local agent in more than one place;
    /// the merge assumes global uniqueness.
    #[error("agent {id} declared more than once (second declaration in {})", file.display())]
    DuplicateAgent {
        id:   AgentId,
        file: PathBuf,
    },
}

/// Alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;
