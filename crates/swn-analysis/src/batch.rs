//! Batch runs over labeled input groups.
//!
//! Failure isolation follows the error taxonomy: unreadable or inconsistent
//! *input* (a `RecordError` or `GraphError`) aborts the whole run — there is
//! no meaningful partial report over broken data — while a degenerate
//! *metric* on one group is recorded against that label and the remaining
//! groups still run.

use std::path::{Path, PathBuf};

use swn_graph::{build_graph, EdgeConfig};
use swn_metrics::MetricsError;
use swn_records::load_dumps;
use swn_report::{EnvironmentReport, EnvironmentRow};

use crate::analysis::environment_row;
use crate::AnalysisResult;

/// One labeled set of dump files, e.g. all per-process dumps of one
/// simulated environment.
#[derive(Clone, Debug)]
pub struct LabeledGroup {
    pub label: String,
    pub files: Vec<PathBuf>,
}

impl LabeledGroup {
    pub fn new(label: impl Into<String>, files: Vec<PathBuf>) -> Self {
        Self { label: label.into(), files }
    }

    /// A group of one file, labeled by its path.
    pub fn single(path: &Path) -> Self {
        Self {
            label: path.display().to_string(),
            files: vec![path.to_path_buf()],
        }
    }
}

/// Per-label outcome of a batch run.
pub type GroupOutcome = (String, Result<EnvironmentRow, MetricsError>);

/// Compute environment statistics for every group under one edge mode.
///
/// Outcomes preserve group order; collect the successes with
/// [`collect_report`] when only the table is needed.
pub fn run_groups(groups: &[LabeledGroup], cfg: EdgeConfig) -> AnalysisResult<Vec<GroupOutcome>> {
    let mut outcomes = Vec::with_capacity(groups.len());
    for group in groups {
        let dumps = load_dumps(&group.files)?;
        let g = build_graph(&dumps, cfg)?;
        outcomes.push((group.label.clone(), environment_row(&group.label, &g)));
    }
    Ok(outcomes)
}

/// Assemble the successful outcomes into a report, dropping failed labels.
pub fn collect_report(outcomes: &[GroupOutcome]) -> EnvironmentReport {
    let mut report = EnvironmentReport::new();
    for (_, outcome) in outcomes {
        if let Ok(row) = outcome {
            report.push(row.clone());
        }
    }
    report
}
