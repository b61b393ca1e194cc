//! `swn-analysis` — end-to-end analysis procedures for the swn workspace.
//!
//! Ties the pipeline together: dump files → merged graph → metrics (and a
//! degree-matched null model) → report rows.  Drivers call this crate and
//! hand the resulting reports to `swn-report` for rendering.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`analysis`] | small-world four-tuple, per-environment statistics     |
//! | [`batch`]    | labeled groups with per-label failure isolation        |
//! | [`error`]    | `AnalysisError`, `AnalysisResult`                      |

pub mod analysis;
pub mod batch;
pub mod error;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use analysis::{
    environment_row, mode_banner, small_world_report, small_world_row, AnalysisOptions, BfsSample,
};
pub use batch::{collect_report, run_groups, GroupOutcome, LabeledGroup};
pub use error::{AnalysisError, AnalysisResult};
