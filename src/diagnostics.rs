//! Advisory diagnostics
//!
//! Decoding Morse is best effort: a missing terminator or an unknown code fragment is
//! worth mentioning but never worth stopping for. Those observations go to a
//! [DiagnosticSink] chosen by the caller. [TracingSink] forwards them to `tracing`,
//! [CollectingSink] keeps them for inspection.

use std::fmt;

/// Something worth reporting that did not stop processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The Morse input did not end with the end-of-message prosign
    MissingTerminator,
    /// A code fragment with no entry in any symbol table
    UnknownCode(String),
}

impl Diagnostic {
    /// Whether a reader would normally want to see this (as opposed to trace detail)
    pub fn is_warning(&self) -> bool {
        matches!(self, Diagnostic::MissingTerminator)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingTerminator => {
                write!(f, "input does not end with the end-of-message prosign")
            }
            Diagnostic::UnknownCode(code) => write!(f, "no symbol for code '{}'", code),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`: warnings at `warn`, the rest at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_warning() {
            tracing::warn!("{}", diagnostic);
        } else {
            tracing::debug!("{}", diagnostic);
        }
    }
}

/// Keeps every diagnostic in arrival order.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let mut sink = CollectingSink::new();
        sink.report(Diagnostic::UnknownCode("......".into()));
        sink.report(Diagnostic::MissingTerminator);
        assert_eq!(
            sink.diagnostics,
            vec![
                Diagnostic::UnknownCode("......".into()),
                Diagnostic::MissingTerminator
            ]
        );
        assert_eq!(sink.warnings().count(), 1);
    }
}
