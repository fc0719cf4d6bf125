//! Plain line-by-line dump

use std::io::{self, Write};

use crate::model::{Cell, Table};

use super::OutputFormatter;

/// Default row limit for previews
pub const PREVIEW_ALL: usize = 65535;

/// Prints a row count line, then every row with text cells quoted
pub struct PreviewOutput {
    limit: usize,
}

impl PreviewOutput {
    pub fn new() -> Self {
        Self { limit: PREVIEW_ALL }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for PreviewOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for PreviewOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> io::Result<()> {
        let total = table.row_count();
        let shown = self.limit.min(total);
        writeln!(writer, "Printing {}/{} lines.", shown, total)?;

        for (i, row) in table.rows().iter().take(shown).enumerate() {
            if row.is_header {
                write!(writer, "Header: ")?;
            } else {
                write!(writer, "Line {}: ", i)?;
            }
            for cell in &row.cells {
                match cell {
                    Cell::Text(s) => write!(writer, "\"{}\" ", s)?,
                    other => write!(writer, "{} ", other)?,
                }
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TableParser;

    #[test]
    fn test_preview_layout() {
        let table = TableParser::default().parse_str("id;name\n1;bob\n2;\n");
        let mut out = Vec::new();
        PreviewOutput::new().render(&table, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Printing 3/3 lines.\n\
             Header: \"id\" \"name\" \n\
             Line 1: 1 \"bob\" \n\
             Line 2: 2 NULL \n"
        );
    }

    #[test]
    fn test_preview_limit() {
        let table = TableParser::default().parse_str("id\n1\n2\n3\n");
        let mut out = Vec::new();
        PreviewOutput::with_limit(2).render(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Printing 2/4 lines.\n"));
        assert_eq!(text.lines().count(), 3);
    }
}
