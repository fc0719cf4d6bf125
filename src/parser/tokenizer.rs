//! Line tokenizer

/// How delimiters inside double quotes are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Every delimiter splits, quoted or not
    #[default]
    Naive,
    /// Delimiters between a pair of `"` are literal
    QuoteAware,
}

/// Splits raw lines into fragments on a single delimiter
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    delimiter: char,
    mode: TokenizerMode,
}

impl Tokenizer {
    /// Create a tokenizer for `delimiter`
    pub fn new(delimiter: char, mode: TokenizerMode) -> Self {
        Self { delimiter, mode }
    }

    /// Split one line into raw fragments.
    ///
    /// Each delimiter ends the current fragment, which may be empty. Text
    /// after the last delimiter is a final fragment only if it is non-empty,
    /// so `"a;"` yields one fragment and `""` yields none. Quote characters
    /// are kept in the fragments.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut fragments = Vec::new();
        let mut start = 0;
        let mut in_quotes = false;

        for (pos, c) in line.char_indices() {
            if c == '"' && self.mode == TokenizerMode::QuoteAware {
                in_quotes = !in_quotes;
            } else if c == self.delimiter && !in_quotes {
                fragments.push(&line[start..pos]);
                start = pos + c.len_utf8();
            }
        }

        if start < line.len() {
            fragments.push(&line[start..]);
        }

        fragments
    }
}
