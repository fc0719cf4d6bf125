//! Cross-type cell ordering

use std::cmp::Ordering;

use crate::config::{SortDirection, SortSettings};
use crate::model::{Cell, Row};

/// Orders cells of one column according to [`SortSettings`]
#[derive(Debug, Clone, Copy)]
pub struct CellComparator {
    case_sensitive: bool,
    direction: SortDirection,
}

impl CellComparator {
    /// Create a new cell comparator
    pub fn new(case_sensitive: bool, direction: SortDirection) -> Self {
        Self {
            case_sensitive,
            direction,
        }
    }

    /// Compare two cells.
    ///
    /// Same-typed cells compare natively. Cells of different types are both
    /// turned into their canonical strings and compared as text, so
    /// `Integer(5)` sorts after `Text("10")`.
    pub fn compare(&self, a: &Cell, b: &Cell) -> Ordering {
        let ordering = match (a, b) {
            (Cell::Integer(x), Cell::Integer(y)) => x.cmp(y),
            // NaN against anything is equal
            (Cell::Float(x), Cell::Float(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
            (Cell::Text(x), Cell::Text(y)) => self.compare_str(x, y),
            (Cell::Null, Cell::Null) => Ordering::Equal,
            _ => self.compare_str(&a.canonical(), &b.canonical()),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Compare `column` of two rows; a row too narrow for the column reads as null
    pub fn compare_rows(&self, a: &Row, b: &Row, column: usize) -> Ordering {
        let a = a.get(column).unwrap_or(&Cell::Null);
        let b = b.get(column).unwrap_or(&Cell::Null);
        self.compare(a, b)
    }

    fn compare_str(&self, a: &str, b: &str) -> Ordering {
        if self.case_sensitive {
            a.as_bytes().cmp(b.as_bytes())
        } else {
            a.bytes()
                .map(|c| c.to_ascii_lowercase())
                .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
        }
    }
}

impl From<&SortSettings> for CellComparator {
    fn from(settings: &SortSettings) -> Self {
        Self::new(settings.case_sensitive, settings.direction)
    }
}

impl Default for CellComparator {
    fn default() -> Self {
        Self::new(true, SortDirection::Ascending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::from(s)
    }

    #[test]
    fn test_native_numeric() {
        let cmp = CellComparator::default();
        assert_eq!(cmp.compare(&Cell::Integer(2), &Cell::Integer(10)), Ordering::Less);
        assert_eq!(cmp.compare(&Cell::Float(2.5), &Cell::Float(-1.0)), Ordering::Greater);
        assert_eq!(cmp.compare(&Cell::Float(f64::NAN), &Cell::Float(1.0)), Ordering::Equal);
        assert_eq!(cmp.compare(&Cell::Null, &Cell::Null), Ordering::Equal);
    }

    #[test]
    fn test_case_sensitivity() {
        let sensitive = CellComparator::new(true, SortDirection::Ascending);
        let insensitive = CellComparator::new(false, SortDirection::Ascending);

        // 'B' (0x42) sorts before 'a' (0x61) by byte value
        assert_eq!(sensitive.compare(&text("B"), &text("a")), Ordering::Less);
        assert_eq!(insensitive.compare(&text("B"), &text("a")), Ordering::Greater);
        assert_eq!(insensitive.compare(&text("abc"), &text("ABC")), Ordering::Equal);
    }

    #[test]
    fn test_mixed_types_fall_back_to_strings() {
        let cmp = CellComparator::default();
        // "5" vs "10": lexicographic, so 10 < 5
        assert_eq!(cmp.compare(&Cell::Integer(5), &text("10")), Ordering::Greater);
        assert_eq!(cmp.compare(&text("10"), &Cell::Integer(5)), Ordering::Less);
        // "2" vs "10.000000"
        assert_eq!(cmp.compare(&Cell::Integer(2), &Cell::Float(10.0)), Ordering::Greater);
        // "NULL" vs "abc": 'N' < 'a'
        assert_eq!(cmp.compare(&Cell::Null, &text("abc")), Ordering::Less);
    }

    #[test]
    fn test_mixed_types_respect_case_setting() {
        let insensitive = CellComparator::new(false, SortDirection::Ascending);
        assert_eq!(insensitive.compare(&Cell::Null, &text("null")), Ordering::Equal);
        assert_eq!(insensitive.compare(&Cell::Null, &text("abc")), Ordering::Greater);
    }

    #[test]
    fn test_descending_negates() {
        let cmp = CellComparator::new(true, SortDirection::Descending);
        assert_eq!(cmp.compare(&Cell::Integer(1), &Cell::Integer(2)), Ordering::Greater);
        assert_eq!(cmp.compare(&Cell::Null, &Cell::Null), Ordering::Equal);
    }

    #[test]
    fn test_missing_cell_reads_as_null() {
        let cmp = CellComparator::default();
        let short = Row::new(vec![Cell::Integer(1)]);
        let long = Row::new(vec![Cell::Integer(1), Cell::Null]);
        assert_eq!(cmp.compare_rows(&short, &long, 1), Ordering::Equal);
    }
}
