//! Header row normalization

use crate::model::{Cell, Row};

/// Name given to a header slot that parsed as null
pub fn placeholder_name(index: usize) -> String {
    format!("__parser_column_{}__", index)
}

/// Turn every header cell into text.
///
/// Numbers become their canonical string, nulls become a placeholder
/// naming the column position, text is left alone. Duplicates are kept.
pub fn normalize_header(row: &mut Row) {
    for (i, cell) in row.cells.iter_mut().enumerate() {
        match cell {
            Cell::Text(_) => {}
            Cell::Integer(_) | Cell::Float(_) => {
                let text = cell.canonical().into_owned();
                *cell = Cell::Text(text);
            }
            Cell::Null => {
                *cell = Cell::Text(placeholder_name(i));
            }
        }
    }
}
