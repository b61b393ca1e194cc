//! JSON dump loader.
//!
//! # File format
//!
//! One JSON document per simulation process:
//!
//! ```json
//! {
//!   "rank": 0,
//!   "grid": { "width": 10, "height": 10 },
//!   "agents": [
//!     { "id": 3, "location": [2, 7], "perceptions": [5], "contacts": [5, 9] }
//!   ],
//!   "distant_agents": [ { "id": 9, "rank": 1 } ]
//! }
//! ```
//!
//! `grid` and `distant_agents` are optional; `rank` and `agents` are
//! required.  Any JSON syntax error or missing required field is reported as
//! [`RecordError::Malformed`] with the offending path.

use std::io::Read;
use std::path::Path;

use crate::record::ProcessDump;
use crate::{RecordError, RecordResult};

/// Load one per-process dump file.
pub fn load_dump(path: &Path) -> RecordResult<ProcessDump> {
    let file = std::fs::File::open(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_dump_reader(std::io::BufReader::new(file), path)
}

/// Like [`load_dump`] but accepts any `Read` source.
///
/// `origin` is recorded as the dump's source path and used in error messages.
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_dump_reader<R: Read>(reader: R, origin: &Path) -> RecordResult<ProcessDump> {
    let mut dump: ProcessDump =
        serde_json::from_reader(reader).map_err(|e| RecordError::Malformed {
            path:   origin.to_path_buf(),
            reason: e.to_string(),
        })?;
    dump.source = origin.to_path_buf();
    Ok(dump)
}

/// Load every file of one input group, in the order given.
///
/// Fails fast on the first unreadable or malformed file — the merge needs
/// the complete vertex set, so a partial load is never useful.
pub fn load_dumps<P: AsRef<Path>>(paths: &[P]) -> RecordResult<Vec<ProcessDump>> {
    paths.iter().map(|p| load_dump(p.as_ref())).collect()
}
