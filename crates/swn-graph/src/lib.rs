//! `swn-graph` — directed interaction multigraph for the swn workspace.
//!
//! Merges per-process agent dumps into one logical graph over the global
//! agent-id space.  Construction is explicitly two-phase — vertex
//! registration over all dumps, then edge resolution — because an edge may
//! reference an agent declared in a different input file than its source.
//!
//! # Usage
//!
//! ```rust,ignore
//! use swn_graph::{build_graph, EdgeConfig};
//!
//! let g = build_graph(&dumps, EdgeConfig::both())?;
//! println!("{} vertices, {} edges", g.vertex_count(), g.edge_count());
//! ```

pub mod builder;
pub mod error;
pub mod graph;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::{build_graph, EdgeConfig, GraphBuilder};
pub use error::{GraphError, GraphResult};
pub use graph::InteractionGraph;
