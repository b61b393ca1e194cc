//! Stable-ordered report collections.
//!
//! Pure assembly and formatting: rows arrive fully computed and are emitted
//! in insertion order, to the console as plain-column tables/blocks or to
//! any `io::Write` as CSV.

use std::io::Write;

use csv::Writer;

use crate::row::{EnvironmentRow, SmallWorldRow};
use crate::table::PlainTable;
use crate::ReportResult;

// ── Small-world comparison report ─────────────────────────────────────────────

/// Labeled small-world four-tuples, one per edge-mode configuration.
#[derive(Clone, Debug, Default)]
pub struct SmallWorldReport {
    rows: Vec<(String, SmallWorldRow)>,
}

impl SmallWorldReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, row: SmallWorldRow) {
        self.rows.push((label.into(), row));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[(String, SmallWorldRow)] {
        &self.rows
    }

    /// Render one four-column table per label, each preceded by its label
    /// line, in insertion order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (label, row) in &self.rows {
            out.push_str(label);
            out.push('\n');
            let mut table = PlainTable::new(SmallWorldRow::FIELD_NAMES);
            table.add_row(row.fields());
            out.push_str(&table.render());
            out.push('\n');
        }
        out
    }

    /// Write all rows as CSV: the four-tuple columns prefixed by a `Mode`
    /// label column.
    pub fn write_csv<W: Write>(&self, writer: W) -> ReportResult<()> {
        let mut w = Writer::from_writer(writer);
        w.write_record(
            std::iter::once("Mode").chain(SmallWorldRow::FIELD_NAMES),
        )?;
        for (label, row) in &self.rows {
            let fields = row.fields();
            w.write_record(std::iter::once(label.as_str()).chain(fields.iter().map(String::as_str)))?;
        }
        w.flush()?;
        Ok(())
    }
}

// ── Per-environment statistics report ─────────────────────────────────────────

/// Graph statistics per labeled input group, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct EnvironmentReport {
    rows: Vec<EnvironmentRow>,
}

impl EnvironmentReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: EnvironmentRow) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[EnvironmentRow] {
        &self.rows
    }

    /// Render one console block per environment, in insertion order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.render_block());
            out.push('\n');
        }
        out
    }

    /// Write the `Environment,C,L,Connectivity` CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> ReportResult<()> {
        let mut w = Writer::from_writer(writer);
        w.write_record(EnvironmentRow::CSV_HEADER)?;
        for row in &self.rows {
            w.write_record(row.csv_record())?;
        }
        w.flush()?;
        Ok(())
    }
}
