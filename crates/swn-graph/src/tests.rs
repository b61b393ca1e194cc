//! Unit tests for swn-graph.
//!
//! Dumps are hand-built structs so tests run without any JSON file.

#[cfg(test)]
mod helpers {
    use std::path::PathBuf;

    use swn_core::{AgentId, GridPoint, Rank};
    use swn_records::{AgentRecord, ProcessDump};

    pub fn agent(id: u64, perceptions: &[u64], contacts: &[u64]) -> AgentRecord {
        AgentRecord {
            id:          AgentId(id),
            location:    GridPoint::new(0, 0),
            perceptions: perceptions.iter().map(|&i| AgentId(i)).collect(),
            contacts:    contacts.iter().map(|&i| AgentId(i)).collect(),
        }
    }

    pub fn dump(rank: u32, file: &str, agents: Vec<AgentRecord>) -> ProcessDump {
        ProcessDump {
            rank: Rank(rank),
            grid: None,
            agents,
            distant_agents: Vec::new(),
            source: PathBuf::from(file),
        }
    }
}

#[cfg(test)]
mod builder {
    use swn_core::{AgentId, VertexId};

    use crate::GraphBuilder;

    #[test]
    fn empty_build() {
        let g = GraphBuilder::new().build();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
        assert_eq!(g.mean_out_degree(), 0.0);
    }

    #[test]
    fn sequential_vertex_ids() {
        let mut b = GraphBuilder::new();
        assert_eq!(b.add_vertex(AgentId(100)), Some(VertexId(0)));
        assert_eq!(b.add_vertex(AgentId(7)), Some(VertexId(1)));
        assert_eq!(b.resolve(AgentId(100)), Some(VertexId(0)));
        assert_eq!(b.resolve(AgentId(8)), None);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut b = GraphBuilder::new();
        assert!(b.add_vertex(AgentId(5)).is_some());
        assert!(b.add_vertex(AgentId(5)).is_none());
        assert_eq!(b.vertex_count(), 1);
    }

    #[test]
    fn csr_adjacency_both_directions() {
        let mut b = GraphBuilder::new();
        let v0 = b.add_vertex(AgentId(0)).unwrap();
        let v1 = b.add_vertex(AgentId(1)).unwrap();
        let v2 = b.add_vertex(AgentId(2)).unwrap();
        // Inserted out of source order to exercise the sort.
        b.add_edge(v2, v0);
        b.add_edge(v0, v1);
        b.add_edge(v0, v2);
        let g = b.build();

        assert_eq!(g.out_neighbors(v0), &[v1, v2]);
        assert!(g.out_neighbors(v1).is_empty());
        assert_eq!(g.out_neighbors(v2), &[v0]);
        assert_eq!(g.in_neighbors(v0), &[v2]);
        assert_eq!(g.in_neighbors(v1), &[v0]);
        assert_eq!(g.in_degree(v2), 1);
        assert_eq!(g.out_degree(v0), 2);
    }

    #[test]
    fn parallel_edges_preserved() {
        let mut b = GraphBuilder::new();
        let v0 = b.add_vertex(AgentId(0)).unwrap();
        let v1 = b.add_vertex(AgentId(1)).unwrap();
        b.add_edge(v0, v1);
        b.add_edge(v0, v1);
        let g = b.build();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.out_neighbors(v0), &[v1, v1]);
        assert_eq!(g.in_neighbors(v1), &[v0, v0]);
    }

    #[test]
    fn edge_iterator_matches_adjacency() {
        let mut b = GraphBuilder::new();
        let v0 = b.add_vertex(AgentId(0)).unwrap();
        let v1 = b.add_vertex(AgentId(1)).unwrap();
        b.add_edge(v1, v0);
        b.add_edge(v0, v1);
        let g = b.build();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(v0, v1), (v1, v0)]);
    }

    #[test]
    fn graph_is_debug_printable() {
        // Test assertions on fallible builds format the graph via Debug.
        let mut b = GraphBuilder::new();
        let v0 = b.add_vertex(AgentId(0)).unwrap();
        b.add_edge(v0, v0);
        let g = b.build();
        assert!(format!("{g:?}").contains("InteractionGraph"));
    }

    #[test]
    fn agent_identity_roundtrip() {
        let mut b = GraphBuilder::new();
        let v = b.add_vertex(AgentId(42)).unwrap();
        let g = b.build();
        assert_eq!(g.agent_of(v), AgentId(42));
        assert_eq!(g.vertex_of(AgentId(42)), Some(v));
        assert_eq!(g.vertex_of(AgentId(43)), None);
    }
}

#[cfg(test)]
mod merge {
    use swn_core::AgentId;

    use crate::{build_graph, EdgeConfig, GraphError};

    use super::helpers::{agent, dump};

    #[test]
    fn cross_file_reference_resolves() {
        // Agent 1 (rank 0) contacts agent 2, which lives in rank 1's dump.
        let dumps = vec![
            dump(0, "agents.0.json", vec![agent(1, &[], &[2])]),
            dump(1, "agents.1.json", vec![agent(2, &[], &[])]),
        ];
        let g = build_graph(&dumps, EdgeConfig::contacts_only()).unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        let v1 = g.vertex_of(AgentId(1)).unwrap();
        let v2 = g.vertex_of(AgentId(2)).unwrap();
        assert_eq!(g.out_neighbors(v1), &[v2]);
    }

    #[test]
    fn edge_mode_selects_relation() {
        let dumps = vec![dump(
            0,
            "agents.0.json",
            vec![agent(1, &[2], &[3]), agent(2, &[], &[]), agent(3, &[], &[])],
        )];

        let contacts = build_graph(&dumps, EdgeConfig::contacts_only()).unwrap();
        assert_eq!(contacts.edge_count(), 1);
        let v1 = contacts.vertex_of(AgentId(1)).unwrap();
        let v3 = contacts.vertex_of(AgentId(3)).unwrap();
        assert_eq!(contacts.out_neighbors(v1), &[v3]);

        let perceptions = build_graph(&dumps, EdgeConfig::perceptions_only()).unwrap();
        assert_eq!(perceptions.edge_count(), 1);
        let v1 = perceptions.vertex_of(AgentId(1)).unwrap();
        let v2 = perceptions.vertex_of(AgentId(2)).unwrap();
        assert_eq!(perceptions.out_neighbors(v1), &[v2]);
    }

    #[test]
    fn union_mode_yields_two_parallel_edges() {
        // Same target both perceived and contacted: degree-sensitive
        // statistics must see two edges, not one.
        let dumps = vec![dump(
            0,
            "agents.0.json",
            vec![agent(1, &[2], &[2]), agent(2, &[], &[])],
        )];
        let g = build_graph(&dumps, EdgeConfig::both()).unwrap();
        assert_eq!(g.edge_count(), 2);
        let v1 = g.vertex_of(AgentId(1)).unwrap();
        let v2 = g.vertex_of(AgentId(2)).unwrap();
        assert_eq!(g.out_neighbors(v1), &[v2, v2]);
    }

    #[test]
    fn dangling_reference_is_unknown_vertex() {
        // Agent 1 in file A contacts id 99, declared nowhere.
        let dumps = vec![
            dump(0, "agents.0.json", vec![agent(1, &[], &[99])]),
            dump(1, "agents.1.json", vec![agent(2, &[], &[])]),
        ];
        let err = build_graph(&dumps, EdgeConfig::contacts_only()).unwrap_err();
        match err {
            GraphError::UnknownVertex { id, referenced_by, file } => {
                assert_eq!(id, AgentId(99));
                assert_eq!(referenced_by, AgentId(1));
                assert_eq!(file.to_str(), Some("agents.0.json"));
            }
            other => panic!("expected UnknownVertex, got {other}"),
        }
    }

    #[test]
    fn duplicate_agent_across_dumps_is_fatal() {
        let dumps = vec![
            dump(0, "agents.0.json", vec![agent(1, &[], &[])]),
            dump(1, "agents.1.json", vec![agent(1, &[], &[])]),
        ];
        let err = build_graph(&dumps, EdgeConfig::contacts_only()).unwrap_err();
        match err {
            GraphError::DuplicateAgent { id, file } => {
                assert_eq!(id, AgentId(1));
                assert_eq!(file.to_str(), Some("agents.1.json"));
            }
            other => panic!("expected DuplicateAgent, got {other}"),
        }
    }

    #[test]
    fn mean_degrees_count_parallel_edges() {
        let dumps = vec![dump(
            0,
            "agents.0.json",
            vec![agent(1, &[2], &[2]), agent(2, &[], &[1])],
        )];
        let g = build_graph(&dumps, EdgeConfig::both()).unwrap();
        // 3 edges over 2 vertices.
        assert_eq!(g.edge_count(), 3);
        assert!((g.mean_out_degree() - 1.5).abs() < 1e-12);
        assert!((g.mean_in_degree() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn labels() {
        assert_eq!(EdgeConfig::contacts_only().label(), "contacts");
        assert_eq!(EdgeConfig::perceptions_only().label(), "perceptions");
        assert_eq!(EdgeConfig::both().label(), "perceptions+contacts");
        assert_eq!(EdgeConfig::default(), EdgeConfig::contacts_only());
    }
}
