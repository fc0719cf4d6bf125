//! Output formatting for tables

mod boxed;
mod delimited;
mod json;
mod preview;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::OutputFormat;
use crate::error::{Result, TableError};
use crate::model::Table;

pub use boxed::BoxedOutput;
pub use delimited::DelimitedOutput;
pub use json::JsonOutput;
pub use preview::{PreviewOutput, PREVIEW_ALL};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a table to a writer
    fn render(&self, table: &Table, writer: &mut dyn Write) -> io::Result<()>;
}

/// Options shared by the formatters
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub delimiter: char,
    /// Row limit for the preview and boxed formats, header included
    pub limit: Option<usize>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            delimiter: crate::config::DEFAULT_DELIMITER,
            limit: None,
        }
    }
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat, options: OutputOptions) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Delimited => Box::new(DelimitedOutput::new(options.delimiter)),
            OutputFormat::Preview => Box::new(PreviewOutput::with_limit(
                options.limit.unwrap_or(PREVIEW_ALL),
            )),
            OutputFormat::Table => match options.limit {
                Some(limit) => Box::new(BoxedOutput::with_limit(limit)),
                None => Box::new(BoxedOutput::new()),
            },
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Write `table` as delimited text to `path`, replacing any existing file
pub fn save_to_file(table: &Table, delimiter: char, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| TableError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    DelimitedOutput::new(delimiter)
        .render(table, &mut writer)
        .map_err(|e| TableError::io(path, e))?;
    tracing::debug!(path = %path.display(), rows = table.row_count(), "table saved");
    Ok(())
}

/// Render a table to stdout
pub fn render_to_stdout(table: &Table, format: OutputFormat, options: OutputOptions) -> io::Result<()> {
    let formatter = OutputFactory::create(format, options);
    let mut stdout = io::stdout().lock();
    formatter.render(table, &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TableParser;

    #[test]
    fn test_save_and_reparse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let parser = TableParser::default();
        let table = parser.parse_str("k;v\nb;2\na;1.25\n");

        save_to_file(&table, ';', &path).unwrap();
        let reparsed = parser.parse_file(&path).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn test_save_to_missing_dir_fails() {
        let table = TableParser::default().parse_str("a\n1\n");
        let err = save_to_file(&table, ';', Path::new("/no/such/dir/out.txt")).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }
}
