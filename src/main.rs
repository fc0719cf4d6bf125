//! delimtab - typed tables from delimiter-separated text

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};

use delimtab::config::{OutputFormat, ParserSettings, SortDirection, SortSettings};
use delimtab::logging::{init_logging, LogConfig};
use delimtab::output::{render_to_stdout, save_to_file, OutputOptions};
use delimtab::parser::TableParser;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Delimited,
    Preview,
    Table,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Delimited => OutputFormat::Delimited,
            CliOutputFormat::Preview => OutputFormat::Preview,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Parse delimiter-separated text into typed cells and sort it by a column
#[derive(Parser, Debug)]
#[command(name = "delimtab")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("sort_column").args(["sort_index", "sort_name"])))]
struct Cli {
    /// Input file to parse
    input: PathBuf,

    /// Field delimiter (a single character)
    #[arg(short, long, default_value_t = ';')]
    delimiter: char,

    /// Skip the first line of the input
    #[arg(long)]
    ignore_first_line: bool,

    /// Treat the first line as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// Do not split on delimiters inside double quotes
    #[arg(long)]
    quote_aware: bool,

    /// Sort by zero-based column index
    #[arg(long, value_name = "N")]
    sort_index: Option<usize>,

    /// Sort by header name (case-insensitive)
    #[arg(long, value_name = "NAME")]
    sort_name: Option<String>,

    /// Sort in descending order
    #[arg(long)]
    descending: bool,

    /// Compare strings case-insensitively when sorting
    #[arg(long)]
    ignore_case: bool,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value = "delimited")]
    format: CliOutputFormat,

    /// Maximum number of rows shown by the preview and table formats,
    /// counting the header row
    #[arg(long)]
    limit: Option<usize>,

    /// Write delimited output to this file instead of stdout
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["format", "limit"])]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig::from_verbosity(cli.verbose)).context("Failed to initialize logging")?;

    let settings = ParserSettings::new()
        .with_delimiter(cli.delimiter)
        .with_ignore_first_line(cli.ignore_first_line)
        .with_first_line_as_header(!cli.no_header)
        .with_quote_aware(cli.quote_aware);

    let parser = TableParser::new(settings);
    let mut table = parser
        .parse_file(&cli.input)
        .with_context(|| format!("Failed to parse file: {}", cli.input.display()))?;

    let sort = match (cli.sort_index, cli.sort_name) {
        (Some(index), _) => Some(SortSettings::by_index(index)),
        (None, Some(name)) => Some(SortSettings::by_name(name)),
        (None, None) => None,
    };

    if let Some(sort) = sort {
        let direction = if cli.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let sort = sort
            .with_direction(direction)
            .with_case_sensitive(!cli.ignore_case);
        table
            .sort(&sort)
            .with_context(|| format!("Failed to sort by column {}", sort.column))?;
    }

    if let Some(ref path) = cli.output {
        save_to_file(&table, cli.delimiter, path)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        return Ok(());
    }

    let options = OutputOptions {
        delimiter: cli.delimiter,
        limit: cli.limit,
    };
    render_to_stdout(&table, cli.format.into(), options).context("Failed to write output")?;

    Ok(())
}
