//! JSON output format

use std::io::{self, Write};

use serde::Serialize;

use crate::model::{Cell, Table};

use super::OutputFormatter;

/// JSON output formatter.
///
/// Non-finite floats are written as strings (`"inf"`, `"NaN"`), never `null`.
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonTable<'a> {
    header_included: bool,
    column_count: usize,
    rows: Vec<&'a [Cell]>,
}

impl OutputFormatter for JsonOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> io::Result<()> {
        let doc = JsonTable {
            header_included: table.header_included(),
            column_count: table.column_count(),
            rows: table.rows().iter().map(|r| r.cells.as_slice()).collect(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &doc)?;
        } else {
            serde_json::to_writer(&mut *writer, &doc)?;
        }
        writeln!(writer)
    }
}
