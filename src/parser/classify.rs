//! Fragment normalization and type inference

use crate::model::{Cell, NULL_LITERAL};

/// Quote wrapping of a trimmed fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    /// Not wrapped in a symmetric pair of quotes
    None,
    /// Exactly `""`
    Empty,
    /// `"..."` with at least one inner character
    Wrapped,
}

fn quoting(s: &str) -> Quoting {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        if s.len() == 2 {
            Quoting::Empty
        } else {
            Quoting::Wrapped
        }
    } else {
        Quoting::None
    }
}

/// Whitespace as C's `isspace` sees it
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Remove every CR/LF, then trim surrounding whitespace
fn normalize(fragment: &str) -> String {
    let stripped: String = fragment.chars().filter(|&c| c != '\r' && c != '\n').collect();
    stripped.trim_matches(is_space).to_string()
}

/// Classify one raw fragment into a typed cell.
///
/// Precedence: symmetric quoting, then null, then unsigned integer, then
/// float, then text. A quoted fragment is always text (or null when empty),
/// so `"007"` stays text while `007` becomes `Integer(7)`.
pub fn classify(fragment: &str) -> Cell {
    let trimmed = normalize(fragment);

    match quoting(&trimmed) {
        Quoting::Empty => return Cell::Null,
        Quoting::Wrapped => return Cell::Text(trimmed[1..trimmed.len() - 1].to_string()),
        Quoting::None => {}
    }

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_LITERAL) {
        return Cell::Null;
    }

    if let Ok(i) = trimmed.parse::<u64>() {
        return Cell::Integer(i);
    }

    if let Ok(f) = trimmed.parse::<f64>() {
        return Cell::Float(f);
    }

    Cell::Text(trimmed)
}
