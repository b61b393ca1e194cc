//! `swn-records` — per-process agent dump loading for the swn workspace.
//!
//! A distributed simulation run leaves one JSON file per process; each file
//! describes the agents that process owned, where they sat on the grid, and
//! the global ids of the agents they perceived or contacted.  This crate
//! turns those files into normalized in-memory records; it performs no
//! cross-file resolution (see `swn-graph` for that).
//!
//! # Usage
//!
//! ```rust,ignore
//! use swn_records::{index_by_rank, load_dumps};
//!
//! let dumps = load_dumps(&paths)?;
//! let by_rank = index_by_rank(&dumps);
//! ```

pub mod error;
pub mod loader;
pub mod record;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RecordError, RecordResult};
pub use loader::{load_dump, load_dump_reader, load_dumps};
pub use record::{index_by_rank, AgentRecord, DistantAgentRef, ProcessDump};
