//! `swn-core` — foundational types for the swn interaction-network analysis
//! workspace.
//!
//! This crate is a dependency of every other `swn-*` crate.  It intentionally
//! has no `swn-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                  |
//! |----------|-------------------------------------------|
//! | [`ids`]  | `AgentId`, `VertexId`, `Rank`             |
//! | [`grid`] | `GridPoint`, `GridDims`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types (required by `swn-records`). |

pub mod grid;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use grid::{GridDims, GridPoint};
pub use ids::{AgentId, Rank, VertexId};
