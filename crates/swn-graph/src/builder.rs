//! Two-phase graph construction.
//!
//! Merging distributed dumps is inherently a whole-dataset-resident,
//! two-pass operation: an edge may reference an agent defined in a different
//! input file than its source, so *every* vertex must be registered before
//! *any* edge is resolved.  [`build_graph`] makes the two phases explicit;
//! [`GraphBuilder`] is the lower-level arena-and-index API it (and the
//! null-model generator) is built on.

use rustc_hash::FxHashMap;

use swn_core::{AgentId, VertexId};
use swn_records::ProcessDump;

use crate::graph::InteractionGraph;
use crate::{GraphError, GraphResult};

// ── Edge-mode configuration ───────────────────────────────────────────────────

/// Selects which relation(s) of the dumps populate the edge set.
///
/// Both flags set yields the union graph *without* deduplication: a target
/// that is both perceived and contacted receives two parallel edges, because
/// edge multiplicity feeds the degree-based statistics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EdgeConfig {
    pub perceptions: bool,
    pub contacts:    bool,
}

impl EdgeConfig {
    pub const fn contacts_only() -> Self {
        Self { perceptions: false, contacts: true }
    }

    pub const fn perceptions_only() -> Self {
        Self { perceptions: true, contacts: false }
    }

    pub const fn both() -> Self {
        Self { perceptions: true, contacts: true }
    }

    /// Stable label for report rows and console banners.
    pub fn label(self) -> &'static str {
        match (self.perceptions, self.contacts) {
            (false, true)  => "contacts",
            (true, false)  => "perceptions",
            (true, true)   => "perceptions+contacts",
            (false, false) => "none",
        }
    }
}

impl Default for EdgeConfig {
    /// Contacts only — the relation the analysis defaults to.
    fn default() -> Self {
        Self::contacts_only()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct an [`InteractionGraph`] incrementally, then call
/// [`build`](Self::build).
///
/// The builder accepts vertices and directed edges in any order, subject to
/// both edge endpoints having been registered first.  `build()` sorts edges
/// into the two CSR layouts (by source and by target).
pub struct GraphBuilder {
    agent_ids: Vec<AgentId>,
    index:     FxHashMap<AgentId, VertexId>,
    edges:     Vec<(VertexId, VertexId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            agent_ids: Vec::new(),
            index:     FxHashMap::default(),
            edges:     Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of vertices and edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(vertices);
        Self {
            agent_ids: Vec::with_capacity(vertices),
            index,
            edges: Vec::with_capacity(edges),
        }
    }

    /// Register a vertex for `id` and return its `VertexId` (sequential
    /// from 0).  Returns `None` if `id` is already registered — global ids
    /// must be unique across all merged dumps.
    pub fn add_vertex(&mut self, id: AgentId) -> Option<VertexId> {
        use std::collections::hash_map::Entry;
        let v = VertexId(self.agent_ids.len() as u32);
        match self.index.entry(id) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(v);
                self.agent_ids.push(id);
                Some(v)
            }
        }
    }

    /// Look up the vertex registered for `id`.
    pub fn resolve(&self, id: AgentId) -> Option<VertexId> {
        self.index.get(&id).copied()
    }

    /// Add one directed edge.  Endpoints must come from
    /// [`add_vertex`](Self::add_vertex) / [`resolve`](Self::resolve) on this
    /// builder.
    #[inline]
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        debug_assert!(from.index() < self.agent_ids.len());
        debug_assert!(to.index() < self.agent_ids.len());
        self.edges.push((from, to));
    }

    pub fn vertex_count(&self) -> usize {
        self.agent_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder and produce an [`InteractionGraph`].
    ///
    /// Time complexity: O(E log E) for the two edge sorts.
    pub fn build(self) -> InteractionGraph {
        let n = self.agent_ids.len();

        // Successor CSR: sort by source vertex.
        let mut by_src = self.edges.clone();
        by_src.sort_unstable_by_key(|e| (e.0.0, e.1.0));
        let out_to: Vec<VertexId> = by_src.iter().map(|e| e.1).collect();
        let out_start = csr_row_pointer(n, by_src.iter().map(|e| e.0));

        // Predecessor CSR: sort by target vertex.
        let mut by_dst = self.edges;
        by_dst.sort_unstable_by_key(|e| (e.1.0, e.0.0));
        let in_from: Vec<VertexId> = by_dst.iter().map(|e| e.0).collect();
        let in_start = csr_row_pointer(n, by_dst.iter().map(|e| e.1));

        InteractionGraph::from_parts(self.agent_ids, self.index, out_start, out_to, in_start, in_from)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a CSR row pointer from edge keys already sorted ascending.
fn csr_row_pointer(n: usize, sorted_keys: impl Iterator<Item = VertexId>) -> Vec<u32> {
    let mut start = vec![0u32; n + 1];
    for k in sorted_keys {
        start[k.index() + 1] += 1;
    }
    for i in 1..=n {
        start[i] += start[i - 1];
    }
    start
}

// ── Two-pass merge ────────────────────────────────────────────────────────────

/// Merge a set of per-process dumps into one directed multigraph.
///
/// Phase 1 registers one vertex per agent record across *all* dumps; phase 2
/// resolves perception and/or contact references into edges.  A reference to
/// an id no dump declared is a fatal input-consistency error, reported with
/// the offending id and the file it came from.
pub fn build_graph(dumps: &[ProcessDump], cfg: EdgeConfig) -> GraphResult<InteractionGraph> {
    let vertices: usize = dumps.iter().map(|d| d.agents.len()).sum();
    let mut b = GraphBuilder::with_capacity(vertices, vertices * 4);

    // Phase 1: vertex registration.
    for dump in dumps {
        for agent in &dump.agents {
            if b.add_vertex(agent.id).is_none() {
                return Err(GraphError::DuplicateAgent {
                    id:   agent.id,
                    file: dump.source.clone(),
                });
            }
        }
    }

    // Phase 2: edge resolution.
    for dump in dumps {
        for agent in &dump.agents {
            // Registered in phase 1, so resolution cannot fail here.
            let src = resolve_target(&b, agent.id, agent.id, dump)?;

            if cfg.perceptions {
                for &target in &agent.perceptions {
                    let dst = resolve_target(&b, agent.id, target, dump)?;
                    b.add_edge(src, dst);
                }
            }
            if cfg.contacts {
                for &target in &agent.contacts {
                    let dst = resolve_target(&b, agent.id, target, dump)?;
                    b.add_edge(src, dst);
                }
            }
        }
    }

    Ok(b.build())
}

fn resolve_target(
    b: &GraphBuilder,
    source: AgentId,
    target: AgentId,
    dump: &ProcessDump,
) -> GraphResult<VertexId> {
    b.resolve(target).ok_or_else(|| GraphError::UnknownVertex {
        id:            target,
        referenced_by: source,
        file:          dump.source.clone(),
    })
}
