//! `swn-report` — tabular result assembly for the swn workspace.
//!
//! No computation happens here: the analysis hands over finished rows and
//! this crate renders them as plain-column console tables or CSV, in stable
//! insertion order.
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`row`]    | `SmallWorldRow`, `EnvironmentRow`               |
//! | [`table`]  | `PlainTable` console rendering                  |
//! | [`report`] | `SmallWorldReport`, `EnvironmentReport`         |
//! | [`error`]  | `ReportError`, `ReportResult`                   |

pub mod error;
pub mod report;
pub mod row;
pub mod table;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ReportError, ReportResult};
pub use report::{EnvironmentReport, SmallWorldReport};
pub use row::{EnvironmentRow, SmallWorldRow};
pub use table::PlainTable;
