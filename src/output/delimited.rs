//! Delimited text writer

use std::io::{self, Write};

use crate::model::Table;

use super::OutputFormatter;

/// Writes rows back as delimiter-separated lines.
///
/// Cells use their canonical form and text is not re-quoted.
pub struct DelimitedOutput {
    delimiter: char,
}

impl DelimitedOutput {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for DelimitedOutput {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DELIMITER)
    }
}

impl OutputFormatter for DelimitedOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> io::Result<()> {
        let mut separator = [0u8; 4];
        let separator = self.delimiter.encode_utf8(&mut separator).as_bytes();

        for row in table.rows() {
            for (i, cell) in row.cells.iter().enumerate() {
                if i > 0 {
                    writer.write_all(separator)?;
                }
                writer.write_all(cell.canonical().as_bytes())?;
            }
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserSettings;
    use crate::parser::TableParser;

    #[test]
    fn test_canonical_cells() {
        let parser = TableParser::new(ParserSettings::new().with_first_line_as_header(false));
        let table = parser.parse_str("a;42;3.5;\"q\"\n;null\n");

        let mut out = Vec::new();
        DelimitedOutput::default().render(&table, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a;42;3.500000;q\nNULL;NULL\n"
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = TableParser::default();
        let table = parser.parse_str("x;y\n1;2\n");

        let mut out = Vec::new();
        DelimitedOutput::new('|').render(&table, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "x|y\n1|2\n");
    }
}
