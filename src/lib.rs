//! delimtab - typed tables from delimiter-separated text
//!
//! Splits each line on a single delimiter, infers a type for every field
//! (text, unsigned integer, float or null) and sorts the resulting rows by
//! one column with a cross-type comparator.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;
pub mod sort;

pub use config::{ParserSettings, SortColumn, SortDirection, SortSettings};
pub use error::{Result, TableError};
pub use model::{Cell, Row, Table};
pub use parser::TableParser;
