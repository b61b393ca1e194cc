//! Directed local clustering coefficient.
//!
//! For a vertex `v`, the neighbor set `N(v)` is the union of predecessors
//! and successors with `v` itself excluded.  The local coefficient is the
//! fraction of *ordered* pairs `(a, b)` in `N(v)×N(v)`, `a ≠ b`, for which
//! at least one edge `a→b` exists:
//!
//! ```text
//! c(v) = closed_ordered_pairs / (|N(v)| · (|N(v)| − 1))      |N(v)| ≥ 2
//! c(v) = 0                                                   otherwise
//! ```
//!
//! Ordered pairs, not unordered — the graph is directed, so `a→b` and `b→a`
//! close two different triangles.  Parallel `a→b` edges close the pair once.
//! The graph-level coefficient is the unweighted arithmetic mean over *all*
//! vertices, zeros included.

use rustc_hash::FxHashSet;

use swn_core::VertexId;
use swn_graph::InteractionGraph;

use crate::{MetricsError, MetricsResult};

/// Per-vertex local clustering coefficients plus their unweighted mean.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusteringResult {
    /// Local coefficient of each vertex, indexed by `VertexId`.
    pub local: Vec<f64>,
    /// Arithmetic mean over all vertices, including zeros.
    pub mean:  f64,
}

/// Compute per-vertex and graph-level clustering.
///
/// Tolerates zero-edge graphs (every coefficient is 0); only a graph with no
/// vertices has no defined mean.
pub fn clustering(g: &InteractionGraph) -> MetricsResult<ClusteringResult> {
    let n = g.vertex_count();
    if n == 0 {
        return Err(MetricsError::EmptyGraph { metric: "clustering coefficient" });
    }

    let mut local = vec![0.0f64; n];
    let mut neighbors: FxHashSet<VertexId> = FxHashSet::default();
    let mut closed_targets: FxHashSet<VertexId> = FxHashSet::default();

    for v in g.vertices() {
        neighbors.clear();
        neighbors.extend(g.out_neighbors(v).iter().copied());
        neighbors.extend(g.in_neighbors(v).iter().copied());
        neighbors.remove(&v); // self-loops do not make v its own neighbor

        let k = neighbors.len();
        if k < 2 {
            continue;
        }

        let mut closed: u64 = 0;
        for &a in &neighbors {
            // Parallel a→b edges must close the ordered pair (a, b) once.
            closed_targets.clear();
            for &b in g.out_neighbors(a) {
                if b != a && neighbors.contains(&b) && closed_targets.insert(b) {
                    closed += 1;
                }
            }
        }

        local[v.index()] = closed as f64 / (k as u64 * (k as u64 - 1)) as f64;
    }

    let mean = local.iter().sum::<f64>() / n as f64;
    Ok(ClusteringResult { local, mean })
}
