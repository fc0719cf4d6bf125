//! Data model for typed tables

mod cell;
mod schema;
mod table;

pub use cell::{Cell, NULL_LITERAL};
pub use schema::CellType;
pub use table::{Row, Table};
