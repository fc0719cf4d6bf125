//! Parser layer: delimited text to typed tables

mod builder;
mod classify;
mod header;
mod tokenizer;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::config::ParserSettings;
use crate::error::{Result, TableError};
use crate::model::{Cell, Row, Table};

pub use self::builder::TableBuilder;
pub use self::classify::classify;
pub use self::header::{normalize_header, placeholder_name};
pub use self::tokenizer::{Tokenizer, TokenizerMode};

/// Label used in errors when reading from an unnamed stream
const STREAM_LABEL: &str = "<stream>";

/// Turns delimited text into a [`Table`]
#[derive(Debug, Clone, Default)]
pub struct TableParser {
    settings: ParserSettings,
}

impl TableParser {
    /// Create a parser with the given settings
    pub fn new(settings: ParserSettings) -> Self {
        Self { settings }
    }

    /// Settings in use
    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Tokenize and classify one line
    pub fn parse_line(&self, line: &str) -> Row {
        let cells: Vec<Cell> = self.tokenizer().split(line).into_iter().map(classify).collect();
        Row::new(cells)
    }

    /// Parse a file from disk
    pub fn parse_file(&self, path: &Path) -> Result<Table> {
        let file = File::open(path).map_err(|e| TableError::io(path, e))?;
        debug!(path = %path.display(), "parsing file");
        self.read_lines(BufReader::new(file), path)
    }

    /// Parse everything a reader yields
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Table> {
        self.read_lines(reader, Path::new(STREAM_LABEL))
    }

    /// Parse an in-memory string
    pub fn parse_str(&self, text: &str) -> Table {
        self.build(text.split_inclusive('\n'))
    }

    fn tokenizer(&self) -> Tokenizer {
        let mode = if self.settings.quote_aware {
            TokenizerMode::QuoteAware
        } else {
            TokenizerMode::Naive
        };
        Tokenizer::new(self.settings.delimiter, mode)
    }

    /// Lines are read with their terminator attached; the classifier strips it.
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the parse.
    fn read_lines<R: BufRead>(&self, mut reader: R, path: &Path) -> Result<Table> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| TableError::io(path, e))?;
            if read == 0 {
                break;
            }
            lines.push(String::from_utf8_lossy(&buf).into_owned());
        }
        Ok(self.build(lines.iter().map(String::as_str)))
    }

    fn build<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Table {
        let header = self.settings.effective_header();
        let mut builder = TableBuilder::new(header);
        let mut lines = lines.into_iter();

        if let Some(first) = lines.next() {
            if self.settings.ignore_first_line {
                trace!("first line ignored");
            } else {
                let mut row = self.parse_line(first);
                if header {
                    normalize_header(&mut row);
                    trace!(width = row.width(), "header row parsed");
                }
                builder.push(row);
            }
        }

        for line in lines {
            let row = self.parse_line(line);
            trace!(width = row.width(), "row parsed");
            builder.push(row);
        }

        let table = builder.finish();
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            header = table.header_included(),
            "table built"
        );
        table
    }
}
