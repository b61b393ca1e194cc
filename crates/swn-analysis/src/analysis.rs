//! Per-configuration analysis procedures.
//!
//! One observed graph and one freshly generated random graph per edge-mode
//! configuration; both are discarded once their metrics are extracted.  The
//! random graph is never reused across configurations — each mode has its
//! own degree statistics and a stale null model would bias the comparison.

use swn_graph::{build_graph, EdgeConfig, InteractionGraph};
use swn_metrics::{
    average_path_length, clustering, connectivity, distance_histogram_sampled, MetricsResult,
};
use swn_random::{generate, NullModelConfig, RandomGraphSpec};
use swn_records::ProcessDump;
use swn_report::{EnvironmentRow, SmallWorldReport, SmallWorldRow};

use crate::AnalysisResult;

// ── Options ───────────────────────────────────────────────────────────────────

/// Seeded BFS source sampling for very large graphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BfsSample {
    pub sources: usize,
    pub seed:    u64,
}

/// Knobs shared by the small-world procedures.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalysisOptions {
    pub null_model: NullModelConfig,
    /// `None` runs exact all-source BFS.
    pub bfs_sample: Option<BfsSample>,
}

impl AnalysisOptions {
    /// Fully deterministic options: seeds the null model (and nothing else).
    pub fn seeded(seed: u64) -> Self {
        Self {
            null_model: NullModelConfig::seeded(seed),
            bfs_sample: None,
        }
    }
}

fn path_length(g: &InteractionGraph, opts: &AnalysisOptions) -> MetricsResult<f64> {
    match opts.bfs_sample {
        Some(s) => distance_histogram_sampled(g, s.sources, s.seed).average(),
        None => average_path_length(g),
    }
}

// ── Small-world comparison ────────────────────────────────────────────────────

/// Compute the small-world four-tuple for one edge-mode configuration.
///
/// Builds the observed graph, regenerates a degree-matched random graph, and
/// extracts L and C from both.
pub fn small_world_row(
    dumps: &[ProcessDump],
    cfg: EdgeConfig,
    opts: &AnalysisOptions,
) -> AnalysisResult<SmallWorldRow> {
    let observed = build_graph(dumps, cfg)?;
    let random = generate(&RandomGraphSpec::from_graph(&observed), &opts.null_model)?;

    Ok(SmallWorldRow {
        l_observed: path_length(&observed, opts)?,
        l_random:   path_length(&random, opts)?,
        c_observed: clustering(&observed)?.mean,
        c_random:   clustering(&random)?.mean,
    })
}

/// Console banner naming one edge-mode configuration, in the form the
/// analysis has always printed it.
pub fn mode_banner(cfg: EdgeConfig) -> String {
    format!(
        "read_perceptions: {}, read_contacts: {}",
        cfg.perceptions, cfg.contacts
    )
}

/// Run the full small-world procedure: contacts only, perceptions only,
/// then the union graph, each against its own fresh null model.
pub fn small_world_report(
    dumps: &[ProcessDump],
    opts: &AnalysisOptions,
) -> AnalysisResult<SmallWorldReport> {
    let modes = [
        EdgeConfig::contacts_only(),
        EdgeConfig::perceptions_only(),
        EdgeConfig::both(),
    ];

    let mut report = SmallWorldReport::new();
    for cfg in modes {
        report.push(mode_banner(cfg), small_world_row(dumps, cfg, opts)?);
    }
    Ok(report)
}

// ── Per-environment statistics ────────────────────────────────────────────────

/// Clustering, exact path length, and connectivity for one labeled graph.
pub fn environment_row(label: &str, g: &InteractionGraph) -> MetricsResult<EnvironmentRow> {
    let c = clustering(g)?;
    let l = average_path_length(g)?;
    let conn = connectivity(g)?;

    Ok(EnvironmentRow {
        label:            label.to_string(),
        clustering:       c.mean,
        path_length:      l,
        outside_largest:  conn.outside_largest,
        connectivity_pct: conn.connectivity_pct,
    })
}
