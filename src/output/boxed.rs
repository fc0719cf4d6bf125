//! Boxed table rendering

use std::io::{self, Write};

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::model::Table;

use super::OutputFormatter;

/// Renders the table inside box-drawing borders
pub struct BoxedOutput {
    limit: Option<usize>,
}

impl BoxedOutput {
    pub fn new() -> Self {
        Self { limit: None }
    }

    /// Show at most `limit` rows, header included
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

impl Default for BoxedOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for BoxedOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> io::Result<()> {
        let width = table
            .rows()
            .iter()
            .map(|row| row.width())
            .max()
            .unwrap_or(0);
        if width == 0 {
            return Ok(());
        }

        let mut builder = Builder::default();
        let limit = self.limit.unwrap_or(usize::MAX);
        for row in table.rows().iter().take(limit) {
            let mut record: Vec<String> = row.cells.iter().map(|c| c.to_string()).collect();
            record.resize(width, String::new());
            builder.push_record(record);
        }

        let mut rendered = builder.build();
        rendered.with(Style::modern());
        writeln!(writer, "{}", rendered)
    }
}
