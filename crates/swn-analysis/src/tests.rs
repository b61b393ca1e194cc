//! Unit tests for swn-analysis.

#[cfg(test)]
mod helpers {
    use std::path::PathBuf;

    use swn_core::{AgentId, GridPoint, Rank};
    use swn_records::{AgentRecord, ProcessDump};

    pub fn agent(id: u64, contacts: &[u64]) -> AgentRecord {
        AgentRecord {
            id:          AgentId(id),
            location:    GridPoint::new(0, 0),
            perceptions: Vec::new(),
            contacts:    contacts.iter().map(|&i| AgentId(i)).collect(),
        }
    }

    pub fn dump(agents: Vec<AgentRecord>) -> ProcessDump {
        ProcessDump {
            rank: Rank(0),
            grid: None,
            agents,
            distant_agents: Vec::new(),
            source: PathBuf::from("test.json"),
        }
    }

    /// One dump holding a one-directional contact cycle of length `n`.
    pub fn contact_cycle(n: u64) -> Vec<ProcessDump> {
        let agents = (0..n).map(|i| agent(i, &[(i + 1) % n])).collect();
        vec![dump(agents)]
    }

    /// Cycle where each agent both perceives and contacts its successor, so
    /// every edge mode yields a non-degenerate graph.
    pub fn interaction_cycle(n: u64) -> Vec<ProcessDump> {
        let agents = (0..n)
            .map(|i| {
                let mut a = agent(i, &[(i + 1) % n]);
                a.perceptions = vec![AgentId((i + 1) % n)];
                a
            })
            .collect();
        vec![dump(agents)]
    }

    /// Two fully-connected contact cliques of size 5 with no edges between
    /// them.
    pub fn two_cliques() -> Vec<ProcessDump> {
        let mut agents = Vec::new();
        for offset in [0u64, 5] {
            for a in offset..offset + 5 {
                let contacts: Vec<u64> =
                    (offset..offset + 5).filter(|&b| b != a).collect();
                agents.push(agent(a, &contacts));
            }
        }
        vec![dump(agents)]
    }

    /// Serialize a contact list per agent into a dump file on disk.
    pub fn write_dump_file(dir: &std::path::Path, name: &str, contacts: &[Vec<u64>]) -> PathBuf {
        let agents: Vec<String> = contacts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let list: Vec<String> = c.iter().map(u64::to_string).collect();
                format!(
                    r#"{{ "id": {i}, "location": [0, 0], "perceptions": [], "contacts": [{}] }}"#,
                    list.join(", ")
                )
            })
            .collect();
        let json = format!(r#"{{ "rank": 0, "agents": [{}] }}"#, agents.join(", "));
        let path = dir.join(name);
        std::fs::write(&path, json).unwrap();
        path
    }
}

#[cfg(test)]
mod small_world {
    use crate::{
        mode_banner, small_world_report, small_world_row, AnalysisError, AnalysisOptions,
        BfsSample,
    };
    use swn_graph::EdgeConfig;
    use swn_metrics::MetricsError;

    use super::helpers::{contact_cycle, interaction_cycle};

    #[test]
    fn observed_metrics_are_exact_on_a_cycle() {
        let dumps = contact_cycle(30);
        let row =
            small_world_row(&dumps, EdgeConfig::contacts_only(), &AnalysisOptions::seeded(42))
                .unwrap();
        // L = (n−1)/2 for a one-directional cycle; a cycle has no triangles.
        assert!((row.l_observed - 14.5).abs() < 1e-12);
        assert_eq!(row.c_observed, 0.0);
        // The null model keeps L finite and C in range.
        assert!(row.l_random.is_finite());
        assert!((0.0..=1.0).contains(&row.c_random));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let dumps = contact_cycle(30);
        let opts = AnalysisOptions::seeded(7);
        let a = small_world_row(&dumps, EdgeConfig::contacts_only(), &opts).unwrap();
        let b = small_world_row(&dumps, EdgeConfig::contacts_only(), &opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sampled_path_length_is_reproducible() {
        let dumps = contact_cycle(30);
        let opts = AnalysisOptions {
            bfs_sample: Some(BfsSample { sources: 5, seed: 11 }),
            ..AnalysisOptions::seeded(7)
        };
        let a = small_world_row(&dumps, EdgeConfig::contacts_only(), &opts).unwrap();
        let b = small_world_row(&dumps, EdgeConfig::contacts_only(), &opts).unwrap();
        assert_eq!(a, b);
        // Every cycle source sees the same profile, so the sample is exact.
        assert!((a.l_observed - 14.5).abs() < 1e-12);
    }

    #[test]
    fn report_runs_all_three_modes_in_order() {
        // Both relations populated: all three edge modes stay non-degenerate.
        let dumps = interaction_cycle(10);
        let report = small_world_report(&dumps, &AnalysisOptions::seeded(3)).unwrap();
        let labels: Vec<&str> = report.rows().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "read_perceptions: false, read_contacts: true",
                "read_perceptions: true, read_contacts: false",
                "read_perceptions: true, read_contacts: true",
            ]
        );
    }

    #[test]
    fn mode_without_edges_aborts_the_report() {
        // Contacts only on the input: the perceptions-only mode sees a
        // zero-edge graph and its degenerate path length ends the run.
        let dumps = contact_cycle(10);
        let err = small_world_report(&dumps, &AnalysisOptions::seeded(3)).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Metrics(MetricsError::NoReachablePairs)
        ));
    }

    #[test]
    fn banner_format() {
        assert_eq!(
            mode_banner(EdgeConfig::both()),
            "read_perceptions: true, read_contacts: true"
        );
    }
}

#[cfg(test)]
mod environment {
    use crate::environment_row;
    use swn_graph::{build_graph, EdgeConfig};
    use swn_metrics::MetricsError;

    use super::helpers::{contact_cycle, dump, two_cliques};

    #[test]
    fn clique_pair_statistics() {
        let dumps = two_cliques();
        let g = build_graph(&dumps, EdgeConfig::contacts_only()).unwrap();
        let row = environment_row("cliques", &g).unwrap();

        assert_eq!(row.label, "cliques");
        assert!((row.clustering - 1.0).abs() < 1e-12);
        // Per source: 1 self-pair + 4 clique mates at distance 1 → 40/50.
        assert!((row.path_length - 0.8).abs() < 1e-12);
        assert_eq!(row.outside_largest, 5);
        assert!((row.connectivity_pct - 50.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_graph_surfaces_as_metric_error() {
        let dumps = vec![dump(vec![super::helpers::agent(0, &[]), super::helpers::agent(1, &[])])];
        let g = build_graph(&dumps, EdgeConfig::contacts_only()).unwrap();
        let err = environment_row("empty", &g).unwrap_err();
        assert_eq!(err, MetricsError::NoReachablePairs);
    }

    #[test]
    fn cycle_row_matches_direct_metrics() {
        let dumps = contact_cycle(5);
        let g = build_graph(&dumps, EdgeConfig::contacts_only()).unwrap();
        let row = environment_row("cycle", &g).unwrap();
        assert!((row.path_length - 2.0).abs() < 1e-12);
        assert_eq!(row.outside_largest, 0);
        assert!((row.connectivity_pct - 100.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod batch {
    use crate::{collect_report, run_groups, AnalysisError, LabeledGroup};
    use swn_graph::EdgeConfig;

    use super::helpers::write_dump_file;

    #[test]
    fn degenerate_label_does_not_abort_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        // Group A: two agents, no contacts at all → degenerate path length.
        let a = write_dump_file(dir.path(), "a.json", &[vec![], vec![]]);
        // Group B: a 3-cycle.
        let b = write_dump_file(dir.path(), "b.json", &[vec![1], vec![2], vec![0]]);

        let groups = vec![LabeledGroup::single(&a), LabeledGroup::single(&b)];
        let outcomes = run_groups(&groups, EdgeConfig::contacts_only()).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].1.is_err());
        let row = outcomes[1].1.as_ref().unwrap();
        assert!((row.path_length - 1.0).abs() < 1e-12);

        let report = collect_report(&outcomes);
        assert_eq!(report.rows().len(), 1);
        assert!(report.rows()[0].label.ends_with("b.json"));
    }

    #[test]
    fn malformed_input_aborts_the_whole_run() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_dump_file(dir.path(), "good.json", &[vec![]]);
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();

        let groups = vec![LabeledGroup::single(&bad), LabeledGroup::single(&good)];
        let err = run_groups(&groups, EdgeConfig::contacts_only()).unwrap_err();
        assert!(matches!(err, AnalysisError::Record(_)));
    }

    #[test]
    fn dangling_reference_aborts_the_whole_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dump_file(dir.path(), "dangling.json", &[vec![99]]);
        let groups = vec![LabeledGroup::single(&path)];
        let err = run_groups(&groups, EdgeConfig::contacts_only()).unwrap_err();
        assert!(matches!(err, AnalysisError::Graph(_)));
    }

    #[test]
    fn multi_file_group_merges_before_measuring() {
        let dir = tempfile::tempdir().unwrap();
        // Agent 0 contacts agent 1, which lives in the second file.  The two
        // files only form a valid graph together.
        let p0 = write_dump_file(dir.path(), "agents.0.json", &[vec![1]]);
        let json = r#"{ "rank": 1, "agents": [
            { "id": 1, "location": [3, 3], "perceptions": [], "contacts": [0] }
        ] }"#;
        let p1 = dir.path().join("agents.1.json");
        std::fs::write(&p1, json).unwrap();

        let groups = vec![LabeledGroup::new("merged", vec![p0, p1])];
        let outcomes = run_groups(&groups, EdgeConfig::contacts_only()).unwrap();
        let row = outcomes[0].1.as_ref().unwrap();
        // 0↔1: per source 1 self-pair + 1 at distance 1 → L = 0.5.
        assert!((row.path_length - 0.5).abs() < 1e-12);
        assert_eq!(row.outside_largest, 0);
    }
}
