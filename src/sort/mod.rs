//! Sort engine: reorders table rows by one column

pub mod compare;
mod quicksort;

use tracing::debug;

use crate::config::{SortColumn, SortSettings};
use crate::error::{Result, TableError};
use crate::model::{Row, Table};

pub use compare::CellComparator;
pub use quicksort::quick_sort;

/// Resolve a column selector to a position in `table`
pub fn resolve_column(table: &Table, column: &SortColumn) -> Result<usize> {
    match column {
        SortColumn::Index(index) => {
            if *index >= table.column_count() {
                return Err(TableError::invalid_column(format!(
                    "index {} is out of range ({} columns)",
                    index,
                    table.column_count()
                )));
            }
            Ok(*index)
        }
        SortColumn::Name(name) => {
            if !table.header_included() {
                return Err(TableError::invalid_column(format!(
                    "cannot look up '{}' in a table without a header",
                    name
                )));
            }
            table.column_index(name).ok_or_else(|| {
                TableError::invalid_column(format!("no header named '{}'", name))
            })
        }
    }
}

/// Sort the data rows of `table` in place.
///
/// The header row, if any, stays at position 0 and never takes part in
/// comparisons. Only row positions change.
pub fn sort(table: &mut Table, settings: &SortSettings) -> Result<()> {
    if table.row_count() == 0 {
        return Err(TableError::invalid_table("table has no rows"));
    }
    if table.column_count() == 0 {
        return Err(TableError::invalid_table("table has no columns"));
    }

    let column = resolve_column(table, &settings.column)?;
    let comparator = CellComparator::from(settings);
    let start = table.data_start();

    let mut order: Vec<usize> = (start..table.row_count()).collect();
    {
        let rows = &table.rows;
        quick_sort(&mut order, |a, b| {
            comparator.compare_rows(&rows[a], &rows[b], column)
        });
    }

    debug!(
        column,
        requested = %settings.column,
        rows = order.len(),
        direction = ?settings.direction,
        "sorted rows"
    );

    apply_permutation(&mut table.rows, start, &order);
    Ok(())
}

/// Rebuild `rows` so that position `start + i` holds the old row `order[i]`
fn apply_permutation(rows: &mut Vec<Row>, start: usize, order: &[usize]) {
    let mut old: Vec<Option<Row>> = std::mem::take(rows).into_iter().map(Some).collect();
    let mut sorted = Vec::with_capacity(old.len());

    sorted.extend(old[..start].iter_mut().filter_map(Option::take));
    sorted.extend(order.iter().filter_map(|&i| old[i].take()));

    *rows = sorted;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ParserSettings, SortDirection};
    use crate::model::Cell;
    use crate::parser::TableParser;

    fn parse(text: &str, header: bool) -> Table {
        TableParser::new(ParserSettings::new().with_first_line_as_header(header)).parse_str(text)
    }

    fn column(table: &Table, index: usize) -> Vec<String> {
        table
            .rows()
            .iter()
            .map(|r| r.get(index).map(|c| c.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_sort_by_index_case_insensitive() {
        let mut table = parse("b\nA\nc\n", false);
        let settings = SortSettings::by_index(0).with_case_sensitive(false);
        table.sort(&settings).unwrap();
        assert_eq!(column(&table, 0), vec!["A", "b", "c"]);
    }

    #[test]
    fn test_sort_case_sensitive_puts_uppercase_first() {
        let mut table = parse("b\nA\nc\nB\n", false);
        table.sort(&SortSettings::by_index(0)).unwrap();
        assert_eq!(column(&table, 0), vec!["A", "B", "b", "c"]);
    }

    #[test]
    fn test_sort_integers_descending() {
        let mut table = parse("n\n3\n10\n1\n", true);
        let settings = SortSettings::by_name("N").with_direction(SortDirection::Descending);
        table.sort(&settings).unwrap();
        assert_eq!(column(&table, 0), vec!["n", "10", "3", "1"]);
    }

    #[test]
    fn test_mixed_types_sort_as_strings() {
        let mut table = parse("5\n\"10\"\n", false);
        table.sort(&SortSettings::by_index(0)).unwrap();
        assert_eq!(table.rows()[0].cells, vec![Cell::from("10")]);
        assert_eq!(table.rows()[1].cells, vec![Cell::Integer(5)]);
    }

    #[test]
    fn test_header_pinned() {
        let mut table = parse("zeta;alpha\n2;b\n1;a\n3;c\n", true);
        let header = table.rows()[0].clone();
        table.sort(&SortSettings::by_name("ALPHA")).unwrap();

        assert_eq!(table.rows()[0], header);
        assert!(table.rows()[0].is_header);
        assert_eq!(column(&table, 1), vec!["alpha", "a", "b", "c"]);
        assert_eq!(column(&table, 0), vec!["zeta", "1", "2", "3"]);
    }

    #[test]
    fn test_name_lookup_scans_whole_header() {
        let mut table = parse("a;b;c\n1;9;x\n2;8;y\n", true);
        table.sort(&SortSettings::by_name("c").with_direction(SortDirection::Descending))
            .unwrap();
        assert_eq!(column(&table, 2), vec!["c", "y", "x"]);
    }

    #[test]
    fn test_name_without_header_fails() {
        let mut table = parse("a\nb\n", false);
        let err = table.sort(&SortSettings::by_name("a")).unwrap_err();
        assert!(matches!(err, TableError::InvalidColumn { .. }));
    }

    #[test]
    fn test_unknown_name_fails() {
        let mut table = parse("a\nb\n", true);
        let err = table.sort(&SortSettings::by_name("zzz")).unwrap_err();
        assert!(matches!(err, TableError::InvalidColumn { .. }));
    }

    #[test]
    fn test_index_out_of_range_fails() {
        let mut table = parse("1;2\n3;4\n", false);
        let err = table.sort(&SortSettings::by_index(2)).unwrap_err();
        assert!(matches!(err, TableError::InvalidColumn { .. }));
    }

    #[test]
    fn test_empty_table_fails() {
        let mut table = parse("", false);
        let err = table.sort(&SortSettings::default()).unwrap_err();
        assert!(matches!(err, TableError::InvalidTable { .. }));
    }

    #[test]
    fn test_header_only_table_fails() {
        let mut table = parse("a;b\n", true);
        let err = table.sort(&SortSettings::default()).unwrap_err();
        assert!(matches!(err, TableError::InvalidTable { .. }));
    }

    #[test]
    fn test_ragged_rows_sort_missing_as_null() {
        let mut table = parse("x;b\ny\nz;a\n", false);
        table.sort(&SortSettings::by_index(1)).unwrap();
        // "NULL" sorts before lowercase letters by byte value
        assert_eq!(column(&table, 0), vec!["y", "z", "x"]);
        assert_eq!(table.rows()[0].width(), 1);
    }

    #[test]
    fn test_failed_sort_leaves_table_untouched() {
        let mut table = parse("b\na\n", false);
        let before = table.clone();
        assert!(table.sort(&SortSettings::by_index(5)).is_err());
        assert_eq!(table, before);
    }
}
