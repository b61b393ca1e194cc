//! Sufficient statistics for regenerating a comparison graph.
//!
//! The null model deliberately sees only three scalars from the observed
//! graph — vertex count and mean in/out degree — never its structure.  That
//! narrow interface keeps the generator testable in isolation and makes the
//! comparison honest: any clustering the null model shows is chance, not
//! leaked topology.

use swn_graph::InteractionGraph;

/// Summary statistics describing the random graph to generate.
///
/// The generated graph itself is a disposable artifact, recomputed per
/// analysis run; only this spec is worth keeping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomGraphSpec {
    pub vertex_count:    usize,
    pub mean_in_degree:  f64,
    pub mean_out_degree: f64,
}

impl RandomGraphSpec {
    pub fn new(vertex_count: usize, mean_in_degree: f64, mean_out_degree: f64) -> Self {
        Self { vertex_count, mean_in_degree, mean_out_degree }
    }

    /// Extract the sufficient statistics from an observed graph.
    pub fn from_graph(g: &InteractionGraph) -> Self {
        Self {
            vertex_count:    g.vertex_count(),
            mean_in_degree:  g.mean_in_degree(),
            mean_out_degree: g.mean_out_degree(),
        }
    }
}
