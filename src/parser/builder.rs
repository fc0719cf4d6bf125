//! Row accumulation

use crate::model::{Row, Table};

/// Accumulates rows into a [`Table`]
#[derive(Debug, Default)]
pub struct TableBuilder {
    rows: Vec<Row>,
    column_count: usize,
    header_included: bool,
}

impl TableBuilder {
    /// Create a builder; with `header_included` the first pushed row is the header
    pub fn new(header_included: bool) -> Self {
        Self {
            rows: Vec::new(),
            column_count: 0,
            header_included,
        }
    }

    /// Append a row.
    ///
    /// The header flag is assigned by position, whatever the row carried.
    /// Only data rows widen the column count.
    pub fn push(&mut self, mut row: Row) {
        row.is_header = self.header_included && self.rows.is_empty();
        if !row.is_header {
            self.column_count = self.column_count.max(row.width());
        }
        self.rows.push(row);
    }

    /// Finish into a table.
    ///
    /// A builder expecting a header that never received a row yields a table
    /// without one.
    pub fn finish(self) -> Table {
        let header_included = self.header_included && !self.rows.is_empty();
        Table {
            rows: self.rows,
            column_count: self.column_count,
            header_included,
        }
    }
}
