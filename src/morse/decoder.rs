//! Morse to text
//!
//! The decoder reverses the layout the encoder writes, splitting on its fixed
//! separators:
//!
//!     message  = line* END_OF_MESSAGE
//!     line     = word (WORD_GAP word)* WORD_GAP NEW_LINE LETTER_GAP
//!     word     = PROSIGN | symbol (LETTER_GAP symbol)*
//!
//! Anything that does not fit is skipped and reported to the diagnostic sink; decoding
//! never fails.

use super::tables::{
    char_for, prosign_label, END_OF_MESSAGE, LETTER_GAP, NEW_LINE, WORD_GAP,
};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};

/// Decode a Morse string into its lines, reporting diagnostics through `tracing`
pub fn decode(morse: &str) -> Vec<String> {
    decode_with(morse, &mut TracingSink)
}

/// Decode a Morse string into its lines, reporting diagnostics to `sink`
pub fn decode_with(morse: &str, sink: &mut dyn DiagnosticSink) -> Vec<String> {
    let morse = morse.trim_end_matches(['\r', '\n']);
    let body = match morse.strip_suffix(END_OF_MESSAGE) {
        Some(body) => body,
        None => {
            sink.report(Diagnostic::MissingTerminator);
            morse
        }
    };

    let line_end = format!("{}{}{}", WORD_GAP, NEW_LINE, LETTER_GAP);
    body.split(line_end.as_str())
        .filter(|line| !line.trim().is_empty())
        .map(|line| decode_line(line, sink))
        .collect()
}

fn decode_line(line: &str, sink: &mut dyn DiagnosticSink) -> String {
    let mut words = Vec::new();

    for word in line.split(WORD_GAP) {
        let word = word.trim();
        if word.is_empty() {
            continue;
        }

        if let Some(label) = prosign_label(word) {
            words.push(format!("[{}]", label));
            continue;
        }

        let decoded = decode_word(word, sink);
        if !decoded.is_empty() {
            words.push(decoded);
        }
    }

    words.join(" ")
}

fn decode_word(word: &str, sink: &mut dyn DiagnosticSink) -> String {
    word.split(LETTER_GAP)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .filter_map(|fragment| {
            let c = char_for(fragment);
            if c.is_none() {
                sink.report(Diagnostic::UnknownCode(fragment.to_string()));
            }
            c
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;

    #[test]
    fn test_decode_letters() {
        assert_eq!(decode("....   ..       .-.-   .-.-."), vec!["HI"]);
    }

    #[test]
    fn test_decode_multiple_lines() {
        assert_eq!(
            decode(".-       .-.-   -...       .-.-   .-.-."),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_decode_prosign_word() {
        assert_eq!(
            decode(".-       ...---...       .-.-   .-.-."),
            vec!["A [Distress]"]
        );
    }

    #[test]
    fn test_missing_terminator_is_reported_not_fatal() {
        let mut sink = CollectingSink::new();
        let lines = decode_with("....   ..       .-.-   ", &mut sink);
        assert_eq!(lines, vec!["HI"]);
        assert_eq!(sink.diagnostics, vec![Diagnostic::MissingTerminator]);
    }

    #[test]
    fn test_unknown_fragment_is_skipped() {
        let mut sink = CollectingSink::new();
        let lines = decode_with(".-   ......   -...       .-.-   .-.-.", &mut sink);
        assert_eq!(lines, vec!["AB"]);
        assert_eq!(
            sink.diagnostics,
            vec![Diagnostic::UnknownCode("......".into())]
        );
    }

    #[test]
    fn test_empty_message() {
        let mut sink = CollectingSink::new();
        assert!(decode_with(END_OF_MESSAGE, &mut sink).is_empty());
        assert!(sink.diagnostics.is_empty());
        assert!(decode_with("", &mut sink).is_empty());
    }

    #[test]
    fn test_trailing_newline_is_ignored() {
        assert_eq!(decode("-       .-.-   .-.-.\n"), vec!["T"]);
    }

    #[test]
    fn test_garbage_never_panics() {
        let mut sink = CollectingSink::new();
        let lines = decode_with("xyz   ...   ??", &mut sink);
        assert_eq!(lines, vec!["S"]);
        assert!(sink.warnings().count() == 1);
    }
}
