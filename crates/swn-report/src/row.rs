//! Plain data row types assembled into reports.
//!
//! Rows are written once by the analysis and never mutated; everything here
//! is formatting-only.  Column names and order are load-bearing — downstream
//! tooling parses them.

/// The small-world four-tuple for one edge-mode configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmallWorldRow {
    pub l_observed: f64,
    pub l_random:   f64,
    pub c_observed: f64,
    pub c_random:   f64,
}

impl SmallWorldRow {
    /// Column headers, in the order downstream tooling expects.
    pub const FIELD_NAMES: [&'static str; 4] =
        ["L_observed", "L_random", "C_observed", "C_random"];

    /// Cell values matching [`FIELD_NAMES`](Self::FIELD_NAMES) order.
    pub fn fields(&self) -> [String; 4] {
        [
            self.l_observed.to_string(),
            self.l_random.to_string(),
            self.c_observed.to_string(),
            self.c_random.to_string(),
        ]
    }
}

/// Graph statistics for one labeled input group ("environment").
#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentRow {
    pub label:            String,
    pub clustering:       f64,
    pub path_length:      f64,
    /// Vertices outside the largest weakly-connected component.
    pub outside_largest:  usize,
    /// `100 · (1 − outside_largest / vertex_count)`.
    pub connectivity_pct: f64,
}

impl EnvironmentRow {
    /// CSV header.  The `Connectivity` cell carries the outside-largest
    /// *count* (the percentage is console-only), matching the format
    /// downstream tooling already consumes.
    pub const CSV_HEADER: [&'static str; 4] = ["Environment", "C", "L", "Connectivity"];

    /// Cell values matching [`CSV_HEADER`](Self::CSV_HEADER) order.
    pub fn csv_record(&self) -> [String; 4] {
        [
            self.label.clone(),
            self.clustering.to_string(),
            self.path_length.to_string(),
            self.outside_largest.to_string(),
        ]
    }

    /// Multi-line console block for one environment.
    pub fn render_block(&self) -> String {
        format!(
            "{}\nC: {}\nL: {}\nConnectivity: {}% (u={})\n",
            self.label,
            self.clustering,
            self.path_length,
            self.connectivity_pct,
            self.outside_largest,
        )
    }
}
