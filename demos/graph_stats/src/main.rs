//! graph_stats — per-environment statistics over the contact graph.
//!
//! Treats each dump file given on the command line as its own labeled
//! environment, prints a C/L/Connectivity block per label, and writes
//! `graph_stats.csv` next to the working directory.  A label whose graph is
//! degenerate (no reachable pairs) is reported on stderr and skipped; the
//! remaining labels still run.
//!
//! ```text
//! graph_stats runs/low_density.json runs/high_density.json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use swn_analysis::{collect_report, run_groups, LabeledGroup};
use swn_graph::EdgeConfig;

const CSV_PATH: &str = "graph_stats.csv";

fn main() -> Result<()> {
    let files: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if files.is_empty() {
        bail!("usage: graph_stats <agents.json>...");
    }

    let groups: Vec<LabeledGroup> = files.iter().map(|p| LabeledGroup::single(p)).collect();
    let outcomes = run_groups(&groups, EdgeConfig::contacts_only())?;

    for (label, outcome) in &outcomes {
        match outcome {
            Ok(row) => println!("{}", row.render_block()),
            Err(e) => eprintln!("{label}: skipped: {e}"),
        }
    }

    let report = collect_report(&outcomes);
    let file = std::fs::File::create(CSV_PATH)
        .with_context(|| format!("creating {CSV_PATH}"))?;
    report.write_csv(file)?;
    Ok(())
}
