//! Tokenizer configuration
//!
//! Character sets are stored as ordered sets: the order carries no meaning, but it keeps
//! `Debug` output and comparisons deterministic.

use std::collections::BTreeSet;

/// Rules the scanner follows for one tokenize call.
///
/// The three character sets are not required to be disjoint. When they overlap the
/// scanner still behaves deterministically: opening a qualifier wins over treating the
/// character as a delimiter, and an escape (or doubled qualifier) wins over closing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub delimiters: BTreeSet<char>,
    pub qualifiers: BTreeSet<char>,
    pub escapes: BTreeSet<char>,
    /// Inserted into a qualified token that continues onto the next line (span mode)
    pub line_join: String,
    /// A doubled active qualifier inside a quoted token stands for one literal qualifier
    pub double_qualifier_escape: bool,
    /// Quoted tokens may continue across line breaks
    pub span: bool,
    /// Emit one [LineGroup](super::LineGroup) per logical line instead of bare tokens
    pub group_lines: bool,
    /// Runs of delimiters produce no empty tokens
    pub ignore_consecutive_delimiters: bool,
}

impl TokenizerConfig {
    /// A config with no delimiters, qualifiers or escapes at all.
    ///
    /// Useful as a base for the builder methods when the defaults get in the way.
    pub fn new() -> Self {
        Self {
            delimiters: BTreeSet::new(),
            qualifiers: BTreeSet::new(),
            escapes: BTreeSet::new(),
            line_join: "\n".to_string(),
            double_qualifier_escape: true,
            span: false,
            group_lines: false,
            ignore_consecutive_delimiters: false,
        }
    }

    pub fn with_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.delimiters = delimiters.into_iter().collect();
        self
    }

    pub fn with_qualifiers(mut self, qualifiers: impl IntoIterator<Item = char>) -> Self {
        self.qualifiers = qualifiers.into_iter().collect();
        self
    }

    pub fn with_escapes(mut self, escapes: impl IntoIterator<Item = char>) -> Self {
        self.escapes = escapes.into_iter().collect();
        self
    }

    pub fn with_line_join(mut self, join: impl Into<String>) -> Self {
        self.line_join = join.into();
        self
    }

    /// Stop treating a doubled qualifier as an escaped one
    pub fn no_double_qualifier(mut self) -> Self {
        self.double_qualifier_escape = false;
        self
    }

    pub fn spanning(mut self) -> Self {
        self.span = true;
        self
    }

    pub fn grouping_lines(mut self) -> Self {
        self.group_lines = true;
        self
    }

    pub fn ignoring_consecutive_delimiters(mut self) -> Self {
        self.ignore_consecutive_delimiters = true;
        self
    }

    pub(crate) fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    pub(crate) fn is_qualifier(&self, c: char) -> bool {
        self.qualifiers.contains(&c)
    }

    pub(crate) fn is_escape(&self, c: char) -> bool {
        self.escapes.contains(&c)
    }
}

impl Default for TokenizerConfig {
    /// Space delimited, `"` quoted, no escapes, doubled quotes are literal quotes.
    fn default() -> Self {
        Self::new().with_delimiters([' ']).with_qualifiers(['"'])
    }
}
