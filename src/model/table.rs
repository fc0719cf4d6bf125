//! Table and Row data structures

use super::cell::Cell;
use crate::config::SortSettings;
use crate::error::Result;

/// A row in the table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cell values in column order; rows are ragged, never padded
    pub cells: Vec<Cell>,
    /// True only for row 0 of a table with a header
    pub is_header: bool,
}

impl Row {
    /// Create a data row
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row
    pub fn header(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Number of cells actually present
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

/// A parsed table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub(crate) rows: Vec<Row>,
    pub(crate) column_count: usize,
    pub(crate) header_included: bool,
}

impl Table {
    /// All rows, header first when present
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows after the header, or every row when there is none
    pub fn data_rows(&self) -> &[Row] {
        &self.rows[self.data_start()..]
    }

    /// The header row, if the table has one
    pub fn header(&self) -> Option<&Row> {
        if self.header_included {
            self.rows.first()
        } else {
            None
        }
    }

    /// Position of the first header cell matching `name`, ignoring ASCII case
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header()?
            .cells
            .iter()
            .position(|cell| cell.as_text().is_some_and(|s| s.eq_ignore_ascii_case(name)))
    }

    /// Index of the first data row
    pub fn data_start(&self) -> usize {
        if self.header_included {
            1
        } else {
            0
        }
    }

    /// Number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest data row
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Whether row 0 is a header
    pub fn header_included(&self) -> bool {
        self.header_included
    }

    /// Reorder data rows in place
    pub fn sort(&mut self, settings: &SortSettings) -> Result<()> {
        crate::sort::sort(self, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TableBuilder;

    fn sample() -> Table {
        let mut builder = TableBuilder::new(true);
        builder.push(Row::header(vec![Cell::from("Id"), Cell::from("Name")]));
        builder.push(Row::new(vec![Cell::Integer(1)]));
        builder.push(Row::new(vec![Cell::Integer(2), Cell::from("bob")]));
        builder.finish()
    }

    #[test]
    fn test_header_accessors() {
        let table = sample();
        assert_eq!(
            table.header().map(|h| h.cells.clone()),
            Some(vec![Cell::from("Id"), Cell::from("Name")])
        );
        assert_eq!(table.data_rows().len(), 2);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_column_index_ignores_case() {
        let table = sample();
        assert_eq!(table.column_index("name"), Some(1));
        assert_eq!(table.column_index("ID"), Some(0));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_no_header_lookup() {
        let mut builder = TableBuilder::new(false);
        builder.push(Row::new(vec![Cell::from("Id")]));
        let table = builder.finish();
        assert!(table.header().is_none());
        assert_eq!(table.column_index("Id"), None);
        assert_eq!(table.data_start(), 0);
    }
}
