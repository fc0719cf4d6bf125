//! Typed cell values

use std::borrow::Cow;

use serde::{Serialize, Serializer};

use super::schema::CellType;

/// Literal used for null cells in text form
pub const NULL_LITERAL: &str = "NULL";

/// A cell value with type information.
///
/// Serializes untagged; non-finite floats serialize as their canonical
/// string (`inf`, `NaN`) so they stay distinct from null.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(u64),
    #[serde(serialize_with = "serialize_float")]
    Float(f64),
    Null,
}

fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format!("{:.6}", value))
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Integer(a), Cell::Integer(b)) => a == b,
            (Cell::Float(a), Cell::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (Cell::Null, Cell::Null) => true,
            _ => false,
        }
    }
}

impl Cell {
    /// Type tag of this cell
    pub fn cell_type(&self) -> CellType {
        match self {
            Cell::Text(_) => CellType::Text,
            Cell::Integer(_) => CellType::Integer,
            Cell::Float(_) => CellType::Float,
            Cell::Null => CellType::Null,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Borrow the text of a `Text` cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical string form.
    ///
    /// Integers are decimal, floats are fixed-point with six fractional
    /// digits, null is `NULL` and text is returned as-is.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Cell::Text(s) => Cow::Borrowed(s.as_str()),
            Cell::Integer(i) => Cow::Owned(i.to_string()),
            Cell::Float(f) => Cow::Owned(format!("{:.6}", f)),
            Cell::Null => Cow::Borrowed(NULL_LITERAL),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<u64> for Cell {
    fn from(i: u64) -> Self {
        Cell::Integer(i)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Cell::Null,
        }
    }
}
