//! Configuration handling for delimtab

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ';';

/// Output format for rendering a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Delimited text, the same shape as the input
    #[default]
    Delimited,
    /// Line-by-line dump with cell types visible
    Preview,
    /// Boxed table
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "delimited" => Ok(OutputFormat::Delimited),
            "preview" => Ok(OutputFormat::Preview),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Settings that control how text is turned into a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    /// Character used to split fields
    pub delimiter: char,
    /// Read and discard the first line
    pub ignore_first_line: bool,
    /// Treat the first line as a header (ignored if `ignore_first_line`)
    pub first_line_as_header: bool,
    /// Do not split on delimiters inside double quotes
    pub quote_aware: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            ignore_first_line: false,
            first_line_as_header: true,
            quote_aware: false,
        }
    }
}

impl ParserSettings {
    /// Create settings with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skip the first line entirely
    pub fn with_ignore_first_line(mut self, ignore: bool) -> Self {
        self.ignore_first_line = ignore;
        self
    }

    /// Flag the first line as a header
    pub fn with_first_line_as_header(mut self, header: bool) -> Self {
        self.first_line_as_header = header;
        self
    }

    /// Protect quoted delimiters from splitting
    pub fn with_quote_aware(mut self, quote_aware: bool) -> Self {
        self.quote_aware = quote_aware;
        self
    }

    /// Whether the first parsed line ends up as a header.
    ///
    /// An ignored first line can never be a header.
    pub fn effective_header(&self) -> bool {
        !self.ignore_first_line && self.first_line_as_header
    }
}

/// How the sort column is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortColumn {
    /// Zero-based column position
    Index(usize),
    /// Header name, matched case-insensitively
    Name(String),
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortColumn::Index(i) => write!(f, "#{}", i),
            SortColumn::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// Settings for a single sort pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSettings {
    pub column: SortColumn,
    pub direction: SortDirection,
    /// Case-sensitive string comparison
    pub case_sensitive: bool,
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            column: SortColumn::Index(0),
            direction: SortDirection::default(),
            case_sensitive: true,
        }
    }
}

impl SortSettings {
    /// Sort by zero-based column index
    pub fn by_index(index: usize) -> Self {
        Self {
            column: SortColumn::Index(index),
            ..Default::default()
        }
    }

    /// Sort by header name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            column: SortColumn::Name(name.into()),
            ..Default::default()
        }
    }

    /// Set the sort direction
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set case sensitivity for string comparisons
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}
