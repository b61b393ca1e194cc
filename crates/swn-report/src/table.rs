//! Plain-column console table.
//!
//! Space-aligned columns with a header row and no borders, for terminal
//! output that stays grep- and diff-friendly:
//!
//! ```text
//! L_observed  L_random  C_observed  C_random
//! 2.41        2.37      0.3181      0.0512
//! ```

/// A left-aligned, space-separated table built row by row.
#[derive(Clone, Debug)]
pub struct PlainTable {
    headers: Vec<String>,
    rows:    Vec<Vec<String>>,
}

impl PlainTable {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows:    Vec::new(),
        }
    }

    /// Append one row.  Short rows are padded with empty cells; extra cells
    /// are kept and get their own width.
    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render with every column padded to its widest cell, two spaces
    /// between columns, no trailing whitespace.
    pub fn render(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain([self.headers.len()])
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for row in std::iter::once(&self.headers).chain(&self.rows) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let mut out = String::new();
        for row in std::iter::once(&self.headers).chain(&self.rows) {
            let mut line = String::new();
            for (i, width) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                if i > 0 {
                    line.push_str("  ");
                }
                line.push_str(cell);
                let pad = width.saturating_sub(cell.len());
                line.extend(std::iter::repeat_n(' ', pad));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
