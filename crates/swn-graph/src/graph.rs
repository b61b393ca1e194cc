//! Directed interaction multigraph.
//!
//! # Data layout
//!
//! The graph stores its adjacency in **Compressed Sparse Row (CSR)** format,
//! twice: once sorted by source (successors) and once sorted by target
//! (predecessors).  Given a `VertexId v`, its successors occupy the slice:
//!
//! ```text
//! out_to[ out_start[v] .. out_start[v+1] ]
//! ```
//!
//! and its predecessors the analogous `in_from` slice.  Iteration over a
//! vertex's neighbors is therefore a contiguous memory scan — ideal for the
//! BFS inner loop of the metrics engine.  The predecessor arrays exist
//! because directed clustering and weak-component labeling both need to walk
//! edges against their direction.
//!
//! Parallel edges are preserved as-is: an agent pair that is both perceived
//! and contacted contributes two entries, and degree-based statistics count
//! both.
//!
//! # Identity
//!
//! Vertices carry the global [`AgentId`] they were registered under; the
//! `agent_ids` arena plus the id→vertex lookup table is the only mapping
//! between the two id spaces.  Synthetic graphs (the null model) register
//! synthetic ids.

use rustc_hash::FxHashMap;

use swn_core::{AgentId, VertexId};

/// An immutable directed multigraph over a dense vertex index space.
///
/// Construct via [`GraphBuilder`](crate::GraphBuilder); once built the graph
/// is read-only and `Sync`, so independent metrics may share it freely.
#[derive(Debug)]
pub struct InteractionGraph {
    /// Global agent id of each vertex.  Indexed by `VertexId`.
    agent_ids: Vec<AgentId>,

    /// Reverse lookup: global agent id → dense vertex index.
    index: FxHashMap<AgentId, VertexId>,

    /// CSR row pointer for successors.  Length = `vertex_count + 1`.
    out_start: Vec<u32>,
    /// Edge targets, sorted by source vertex.
    out_to: Vec<VertexId>,

    /// CSR row pointer for predecessors.  Length = `vertex_count + 1`.
    in_start: Vec<u32>,
    /// Edge sources, sorted by target vertex.
    in_from: Vec<VertexId>,
}

impl InteractionGraph {
    pub(crate) fn from_parts(
        agent_ids: Vec<AgentId>,
        index: FxHashMap<AgentId, VertexId>,
        out_start: Vec<u32>,
        out_to: Vec<VertexId>,
        in_start: Vec<u32>,
        in_from: Vec<VertexId>,
    ) -> Self {
        debug_assert_eq!(out_start.len(), agent_ids.len() + 1);
        debug_assert_eq!(in_start.len(), agent_ids.len() + 1);
        debug_assert_eq!(out_to.len(), in_from.len());
        Self { agent_ids, index, out_start, out_to, in_start, in_from }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.agent_ids.len()
    }

    /// Number of directed edges, parallel edges counted individually.
    pub fn edge_count(&self) -> usize {
        self.out_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agent_ids.is_empty()
    }

    /// Iterator over all vertex ids, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.agent_ids.len()).map(|i| VertexId(i as u32))
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Successors of `v` (edge targets), one entry per edge.
    #[inline]
    pub fn out_neighbors(&self, v: VertexId) -> &[VertexId] {
        let start = self.out_start[v.index()] as usize;
        let end   = self.out_start[v.index() + 1] as usize;
        &self.out_to[start..end]
    }

    /// Predecessors of `v` (edge sources), one entry per edge.
    #[inline]
    pub fn in_neighbors(&self, v: VertexId) -> &[VertexId] {
        let start = self.in_start[v.index()] as usize;
        let end   = self.in_start[v.index() + 1] as usize;
        &self.in_from[start..end]
    }

    #[inline]
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_neighbors(v).len()
    }

    #[inline]
    pub fn in_degree(&self, v: VertexId) -> usize {
        self.in_neighbors(v).len()
    }

    /// Iterator over every directed edge as a `(from, to)` pair, sorted by
    /// source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices().flat_map(move |v| {
            self.out_neighbors(v).iter().map(move |&t| (v, t))
        })
    }

    // ── Degree statistics ─────────────────────────────────────────────────

    /// Mean out-degree over all vertices (`E / V`; `0.0` for an empty graph).
    pub fn mean_out_degree(&self) -> f64 {
        if self.agent_ids.is_empty() {
            0.0
        } else {
            self.out_to.len() as f64 / self.agent_ids.len() as f64
        }
    }

    /// Mean in-degree over all vertices.  Numerically equal to
    /// [`mean_out_degree`](Self::mean_out_degree) for any directed graph,
    /// kept separate because the null model is parameterized by both.
    pub fn mean_in_degree(&self) -> f64 {
        if self.agent_ids.is_empty() {
            0.0
        } else {
            self.in_from.len() as f64 / self.agent_ids.len() as f64
        }
    }

    // ── Identity ──────────────────────────────────────────────────────────

    /// Resolve a global agent id to its vertex, if registered.
    pub fn vertex_of(&self, id: AgentId) -> Option<VertexId> {
        self.index.get(&id).copied()
    }

    /// Global agent id of a vertex.
    pub fn agent_of(&self, v: VertexId) -> AgentId {
        self.agent_ids[v.index()]
    }
}
