//! Normalized in-memory form of one per-process agent dump.
//!
//! Records are immutable after load: the loader produces them once and the
//! graph builder consumes them by reference.  Nothing here resolves
//! cross-process references — that happens during graph construction, where
//! the full vertex set is known.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use swn_core::{AgentId, GridDims, GridPoint, Rank};

/// One agent as described by the process that owned it.
///
/// `perceptions` and `contacts` hold *global* agent ids; targets may live in
/// a different dump file than this record.  Repeated ids in either list are
/// preserved — each element becomes one edge when a graph is built.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AgentRecord {
    pub id:          AgentId,
    pub location:    GridPoint,
    pub perceptions: Vec<AgentId>,
    pub contacts:    Vec<AgentId>,
}

/// Reference to an agent owned by another process, with its owning rank.
///
/// Only the excluded spatial-plotting collaborator needs the id→rank mapping;
/// graph construction relies solely on global id uniqueness.  Parsed and
/// retained so dumps survive a load/inspect round trip intact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DistantAgentRef {
    pub id:   AgentId,
    pub rank: Rank,
}

/// Everything one simulation process wrote about the agents it owned.
#[derive(Clone, Debug, Deserialize)]
pub struct ProcessDump {
    pub rank: Rank,

    /// Overall grid dimensions; optional, consumed by the visualization
    /// collaborator only.
    #[serde(default)]
    pub grid: Option<GridDims>,

    pub agents: Vec<AgentRecord>,

    #[serde(default)]
    pub distant_agents: Vec<DistantAgentRef>,

    /// Path the dump was loaded from.  Not part of the wire format; attached
    /// by the loader and used for error context during edge resolution.
    #[serde(skip)]
    pub source: PathBuf,
}

impl ProcessDump {
    /// Index this dump's local agents by id.
    pub fn agents_by_id(&self) -> BTreeMap<AgentId, &AgentRecord> {
        self.agents.iter().map(|a| (a.id, a)).collect()
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

/// Build the rank → agent-id → record mapping over a set of loaded dumps.
///
/// `BTreeMap` keeps iteration deterministic (ascending rank, then id), which
/// matters for reproducible error reporting and test assertions.
pub fn index_by_rank(dumps: &[ProcessDump]) -> BTreeMap<Rank, BTreeMap<AgentId, &AgentRecord>> {
    dumps
        .iter()
        .map(|d| (d.rank, d.agents_by_id()))
        .collect()
}
