//! smallworld — small-world comparison over a set of agent dump files.
//!
//! Loads every per-process dump given on the command line, then runs the
//! analysis once per edge mode (contacts only, perceptions only, union),
//! printing the four-tuple table for each mode.  The null model is
//! entropy-seeded: repeated runs give statistically equivalent but not
//! identical random columns.
//!
//! ```text
//! smallworld output/agents.0.json output/agents.1.json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};

use swn_analysis::{small_world_report, AnalysisOptions};
use swn_records::load_dumps;

fn main() -> Result<()> {
    let files: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if files.is_empty() {
        bail!("usage: smallworld <agents.json>...");
    }

    let dumps = load_dumps(&files)?;
    let report = small_world_report(&dumps, &AnalysisOptions::default())?;

    println!();
    print!("{}", report.render());
    Ok(())
}
