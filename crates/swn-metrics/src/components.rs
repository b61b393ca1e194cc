//! Weakly-connected component labeling and connectivity coverage.
//!
//! Components are found by BFS over the *undirected* view of the graph
//! (successors and predecessors alike).  The report mirrors the original
//! analysis output: how many vertices sit outside the largest component, and
//! the coverage percentage `100·(1 − outside/n)`.

use std::collections::VecDeque;

use swn_core::VertexId;
use swn_graph::InteractionGraph;

use crate::{MetricsError, MetricsResult};

/// Weak-connectivity summary of one graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectivityReport {
    /// Number of weakly-connected components.
    pub component_count:   usize,
    /// Vertex count of the largest component.
    pub largest_component: usize,
    /// Vertices outside the largest component.
    pub outside_largest:   usize,
    /// `100 · (1 − outside_largest / vertex_count)`.
    pub connectivity_pct:  f64,
}

/// Label weak components and report coverage of the largest one.
pub fn connectivity(g: &InteractionGraph) -> MetricsResult<ConnectivityReport> {
    let n = g.vertex_count();
    if n == 0 {
        return Err(MetricsError::EmptyGraph { metric: "connectivity" });
    }

    const UNLABELED: u32 = u32::MAX;
    let mut label = vec![UNLABELED; n];
    let mut sizes: Vec<usize> = Vec::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    for start in g.vertices() {
        if label[start.index()] != UNLABELED {
            continue;
        }
        let comp = sizes.len() as u32;
        let mut size = 0usize;

        label[start.index()] = comp;
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            size += 1;
            let step = |next: VertexId, label: &mut [u32], queue: &mut VecDeque<VertexId>| {
                if label[next.index()] == UNLABELED {
                    label[next.index()] = comp;
                    queue.push_back(next);
                }
            };
            for &next in g.out_neighbors(v) {
                step(next, &mut label, &mut queue);
            }
            for &next in g.in_neighbors(v) {
                step(next, &mut label, &mut queue);
            }
        }
        sizes.push(size);
    }

    let largest = sizes.iter().copied().max().unwrap_or(0);
    let outside = n - largest;
    Ok(ConnectivityReport {
        component_count:   sizes.len(),
        largest_component: largest,
        outside_largest:   outside,
        connectivity_pct:  100.0 * (1.0 - outside as f64 / n as f64),
    })
}
