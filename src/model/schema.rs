//! Cell type tags

use serde::{Deserialize, Serialize};

/// Type tag of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Text,
    Integer,
    Float,
    Null,
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellType::Text => write!(f, "text"),
            CellType::Integer => write!(f, "integer"),
            CellType::Float => write!(f, "float"),
            CellType::Null => write!(f, "null"),
        }
    }
}
