//! Stochastic degree-sequence graph generation.
//!
//! # Model
//!
//! For each of the `vertex_count` vertices, two independent draws:
//!
//! ```text
//! k_in(v)  ~ Poisson(round(mean_in_degree))
//! k_out(v) ~ Poisson(round(mean_out_degree))
//! ```
//!
//! Each vertex contributes `k_out(v)` out-stubs and `k_in(v)` in-stubs.
//! Both stub lists are shuffled and paired positionally; each pair becomes
//! one directed edge, so every out-stub meets a uniformly random in-stub.
//! Surplus stubs on the longer side are discarded.  The expected in/out
//! degree of every vertex therefore matches the observed graph's mean
//! degrees — the invariant the small-world comparison rests on.
//!
//! A rounded mean of 0 short-circuits to all-zero draws (`Poisson(0)` is not
//! constructible).
//!
//! # Self-loops
//!
//! Allowed by default ([`NullModelConfig::allow_self_loops`]); when
//! forbidden, pairs that would form a self-loop are dropped instead of
//! redrawn, costing a vanishing fraction of edges.
//!
//! # Determinism
//!
//! A fixed seed reproduces the exact edge multiset.  Without a seed the
//! generator is entropy-seeded and repeated invocations on the same spec
//! will differ — tests must seed explicitly.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

use swn_core::{AgentId, VertexId};
use swn_graph::{GraphBuilder, InteractionGraph};

use crate::{RandomError, RandomGraphSpec, RandomResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Generation knobs for the null model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullModelConfig {
    /// Whether a drawn edge may connect a vertex to itself.
    pub allow_self_loops: bool,
    /// Fixed seed for reproducible generation; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl NullModelConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }
}

impl Default for NullModelConfig {
    fn default() -> Self {
        Self { allow_self_loops: true, seed: None }
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

/// Generate a random directed graph matching `spec`'s summary statistics.
///
/// The result is a plain [`InteractionGraph`] (with synthetic agent ids
/// `0..vertex_count`), so every metric runs on it unchanged.
pub fn generate(spec: &RandomGraphSpec, cfg: &NullModelConfig) -> RandomResult<InteractionGraph> {
    let in_dist = degree_distribution(spec.mean_in_degree, "mean_in_degree")?;
    let out_dist = degree_distribution(spec.mean_out_degree, "mean_out_degree")?;

    let mut rng = match cfg.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let n = spec.vertex_count;
    let mut b = GraphBuilder::with_capacity(n, expected_edges(spec));
    for i in 0..n {
        // Synthetic ids: the null model has no agents behind it.  Fresh ids
        // cannot collide, so the duplicate check never fires.
        let _ = b.add_vertex(AgentId(i as u64));
    }

    let mut in_stubs: Vec<VertexId> = Vec::new();
    let mut out_stubs: Vec<VertexId> = Vec::new();
    for i in 0..n {
        let v = VertexId(i as u32);
        for _ in 0..draw(&in_dist, &mut rng) {
            in_stubs.push(v);
        }
        for _ in 0..draw(&out_dist, &mut rng) {
            out_stubs.push(v);
        }
    }

    // Shuffle both sides so positional pairing is uniform and truncation of
    // the longer list does not bias low-index vertices.
    in_stubs.shuffle(&mut rng);
    out_stubs.shuffle(&mut rng);

    for (&from, &to) in out_stubs.iter().zip(&in_stubs) {
        if cfg.allow_self_loops || from != to {
            b.add_edge(from, to);
        }
    }

    Ok(b.build())
}

fn degree_distribution(mean: f64, what: &str) -> RandomResult<Option<Poisson<f64>>> {
    if !mean.is_finite() || mean < 0.0 {
        return Err(RandomError::InvalidSpec(format!("{what} = {mean}")));
    }
    let lambda = mean.round();
    if lambda == 0.0 {
        return Ok(None); // degree is always 0
    }
    Poisson::new(lambda)
        .map(Some)
        .map_err(|e| RandomError::InvalidSpec(format!("{what} = {mean}: {e}")))
}

fn draw(dist: &Option<Poisson<f64>>, rng: &mut impl Rng) -> u64 {
    match dist {
        Some(d) => d.sample(rng) as u64,
        None => 0,
    }
}

fn expected_edges(spec: &RandomGraphSpec) -> usize {
    (spec.vertex_count as f64 * spec.mean_out_degree.round()) as usize
}
