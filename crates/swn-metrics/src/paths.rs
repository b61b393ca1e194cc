//! Shortest-path distance histogram and average path length.
//!
//! From every source vertex (or a seeded sample of sources), an unweighted,
//! edge-direction-respecting BFS accumulates a global histogram mapping
//! distance → count of ordered reachable pairs.  Every source contributes
//! its own self-pair at distance 0; unreachable pairs are excluded from the
//! denominator, not treated as infinite distance.  A one-directional cycle
//! of length `n` therefore averages to exactly `(n−1)/2`.
//!
//! Per-source histograms merge by element-wise addition — commutative and
//! associative — so the `parallel` feature can fan BFS out across Rayon
//! workers and reduce without locking.

use std::collections::VecDeque;

use swn_core::VertexId;
use swn_graph::InteractionGraph;

use crate::{MetricsError, MetricsResult};

// ── DistanceHistogram ─────────────────────────────────────────────────────────

/// Counts of ordered reachable vertex pairs per shortest distance.
///
/// Bucket 0 holds the self-pairs of the BFS sources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceHistogram {
    counts: Vec<u64>,
}

impl DistanceHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one ordered pair at `distance`.
    #[inline]
    pub fn record(&mut self, distance: u32) {
        let idx = distance as usize;
        if idx >= self.counts.len() {
            self.counts.resize(idx + 1, 0);
        }
        self.counts[idx] += 1;
    }

    /// Element-wise addition of another histogram into this one.
    pub fn merge(&mut self, other: &DistanceHistogram) {
        if other.counts.len() > self.counts.len() {
            self.counts.resize(other.counts.len(), 0);
        }
        for (dst, src) in self.counts.iter_mut().zip(&other.counts) {
            *dst += src;
        }
    }

    /// Number of pairs recorded at exactly `distance`.
    pub fn count_at(&self, distance: u32) -> u64 {
        self.counts.get(distance as usize).copied().unwrap_or(0)
    }

    /// Total ordered reachable pairs across all buckets, self-pairs included.
    pub fn total_pairs(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Non-empty `(distance, count)` buckets, ascending.
    pub fn buckets(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(d, &c)| (d as u32, c))
    }

    /// Weighted mean distance: `Σ(d·count) / Σcount` over recorded pairs.
    ///
    /// Self-pairs alone cannot define a path length: if no pair at distance
    /// ≥ 1 exists (zero edges, or an isolated vertex set), the mean is
    /// undefined and [`MetricsError::NoReachablePairs`] is returned instead
    /// of a zero denominator or a vacuous 0.0.
    pub fn average(&self) -> MetricsResult<f64> {
        if self.counts.iter().skip(1).all(|&c| c == 0) {
            return Err(MetricsError::NoReachablePairs);
        }
        let weighted: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(d, &c)| d as f64 * c as f64)
            .sum();
        Ok(weighted / self.total_pairs() as f64)
    }
}

// ── BFS accumulation ──────────────────────────────────────────────────────────

/// Single-source BFS; records the distance of every vertex reachable from
/// `src` (including `src` itself at distance 0) into `hist`.
fn bfs_accumulate(
    g: &InteractionGraph,
    src: VertexId,
    dist: &mut [u32],
    queue: &mut VecDeque<VertexId>,
    hist: &mut DistanceHistogram,
) {
    dist.fill(u32::MAX);
    queue.clear();

    dist[src.index()] = 0;
    hist.record(0);
    queue.push_back(src);

    while let Some(v) = queue.pop_front() {
        let d = dist[v.index()];
        for &next in g.out_neighbors(v) {
            if dist[next.index()] == u32::MAX {
                dist[next.index()] = d + 1;
                hist.record(d + 1);
                queue.push_back(next);
            }
        }
    }
}

fn histogram_over_sources(g: &InteractionGraph, sources: &[VertexId]) -> DistanceHistogram {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        return sources
            .par_iter()
            .fold(
                || (DistanceHistogram::new(), vec![u32::MAX; g.vertex_count()], VecDeque::new()),
                |(mut hist, mut dist, mut queue), &src| {
                    bfs_accumulate(g, src, &mut dist, &mut queue, &mut hist);
                    (hist, dist, queue)
                },
            )
            .map(|(hist, _, _)| hist)
            .reduce(DistanceHistogram::new, |mut a, b| {
                a.merge(&b);
                a
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        let mut hist = DistanceHistogram::new();
        let mut dist = vec![u32::MAX; g.vertex_count()];
        let mut queue = VecDeque::new();
        for &src in sources {
            bfs_accumulate(g, src, &mut dist, &mut queue, &mut hist);
        }
        hist
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Exact distance histogram: BFS from every vertex.
///
/// O(V·(V+E)) time; the histogram itself is tiny (max bucket = diameter).
pub fn distance_histogram(g: &InteractionGraph) -> DistanceHistogram {
    let sources: Vec<VertexId> = g.vertices().collect();
    histogram_over_sources(g, &sources)
}

/// Sampled distance histogram: BFS from `sources` vertices drawn uniformly
/// without replacement under `seed`.
///
/// Sampling sources (but still scanning all targets) keeps the estimator of
/// the mean distance unbiased while cutting the V² cost to `sources·(V+E)`.
pub fn distance_histogram_sampled(
    g: &InteractionGraph,
    sources: usize,
    seed: u64,
) -> DistanceHistogram {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let n = g.vertex_count();
    let k = sources.min(n);
    let mut rng = SmallRng::seed_from_u64(seed);
    let picked: Vec<VertexId> = rand::seq::index::sample(&mut rng, n, k)
        .into_iter()
        .map(|i| VertexId(i as u32))
        .collect();
    histogram_over_sources(g, &picked)
}

/// Average shortest path length over ordered reachable pairs.
///
/// Fails with [`MetricsError::NoReachablePairs`] if the graph has no pair at
/// finite distance ≥ 1 (e.g. zero edges) rather than reporting a vacuous
/// value.
pub fn average_path_length(g: &InteractionGraph) -> MetricsResult<f64> {
    distance_histogram(g).average()
}
