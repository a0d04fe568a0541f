//! Character scanner
//!
//!     An index driven state machine with two states, `Normal` and `InQualifier`. One
//!     cursor walks the characters of a physical line; lookahead is a peek at the next
//!     character, skipping ahead is advancing the cursor.
//!
//! Inside a qualifier, in priority order:
//!
//!     - An escape character, or the active qualifier itself when doubled qualifiers
//!       are escapes, followed by the active qualifier: one literal qualifier is added
//!       and both characters are consumed.
//!     - The active qualifier: the token is closed and emitted, then everything up to
//!       and including the next delimiter is dropped.
//!     - Anything else is appended.
//!
//! Outside a qualifier, in priority order:
//!
//!     - A qualifier while the token is empty or only whitespace: the qualifier opens
//!       and the whitespace is discarded.
//!     - A delimiter: the token is emitted, unless it is empty and consecutive
//!       delimiters are ignored.
//!     - Anything else is appended.
//!
//! Line ends are handled by [Scanner::end_line]. The scanner only ever sees physical
//! lines, so a line break character never reaches the per-character loop.

use super::config::TokenizerConfig;
use super::{LineGroup, Tokenized};
use std::collections::VecDeque;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InQualifier(char),
}

/// Scan state carried across the lines of one tokenize call.
#[derive(Debug)]
pub struct Scanner {
    config: TokenizerConfig,
    state: ScanState,
    token: String,
    group: Vec<String>,
    /// A spanning token is waiting for the next line before the join string goes in
    pending_join: bool,
}

impl Scanner {
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            state: ScanState::Normal,
            token: String::new(),
            group: Vec::new(),
            pending_join: false,
        }
    }

    /// Scan one physical line, pushing every completed item onto `out`.
    pub fn scan_line(&mut self, line: &str, out: &mut VecDeque<Tokenized>) {
        if mem::take(&mut self.pending_join) {
            self.token.push_str(&self.config.line_join);
        }

        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match self.state {
                ScanState::InQualifier(qualifier) => {
                    let next = chars.get(i + 1).copied();
                    let escapes_next = self.config.is_escape(c)
                        || (c == qualifier && self.config.double_qualifier_escape);

                    if escapes_next && next == Some(qualifier) {
                        self.token.push(qualifier);
                        i += 2;
                        continue;
                    }

                    if c == qualifier {
                        self.state = ScanState::Normal;
                        self.emit(out);
                        i = self.skip_past_delimiter(&chars, i + 1);
                        continue;
                    }

                    self.token.push(c);
                }
                ScanState::Normal => {
                    if self.config.is_qualifier(c) && self.token.chars().all(char::is_whitespace) {
                        self.token.clear();
                        self.state = ScanState::InQualifier(c);
                    } else if self.config.is_delimiter(c) {
                        if !self.token.is_empty() || !self.config.ignore_consecutive_delimiters {
                            self.emit(out);
                        }
                    } else {
                        self.token.push(c);
                    }
                }
            }
            i += 1;
        }

        self.end_line(out);
    }

    /// Close out a physical line.
    ///
    /// An open qualifier in span mode keeps the token going; the join string is added
    /// once the next line actually arrives. Otherwise any token in progress is emitted
    /// (an open qualifier counts as in progress even when empty), the qualifier is
    /// closed, and the line group is flushed.
    pub fn end_line(&mut self, out: &mut VecDeque<Tokenized>) {
        if let ScanState::InQualifier(_) = self.state {
            if self.config.span {
                self.pending_join = true;
                return;
            }
            self.state = ScanState::Normal;
            self.emit(out);
        } else if !self.token.is_empty() {
            self.emit(out);
        }
        self.flush_group(out);
    }

    /// Flush whatever is left once the input is exhausted.
    ///
    /// A spanning token that never closed is emitted without a trailing join.
    pub fn finish(&mut self, out: &mut VecDeque<Tokenized>) {
        self.pending_join = false;
        if self.state != ScanState::Normal || !self.token.is_empty() {
            self.state = ScanState::Normal;
            self.emit(out);
        }
        self.flush_group(out);
    }

    /// Skip the characters trailing a closing qualifier, up to and including the next
    /// delimiter. Returns the index to resume scanning at.
    fn skip_past_delimiter(&self, chars: &[char], mut i: usize) -> usize {
        while i < chars.len() {
            let skipped = chars[i];
            i += 1;
            if self.config.is_delimiter(skipped) {
                break;
            }
            tracing::trace!(character = %skipped, "dropped text after closing qualifier");
        }
        i
    }

    fn emit(&mut self, out: &mut VecDeque<Tokenized>) {
        let token = mem::take(&mut self.token);
        if self.config.group_lines {
            self.group.push(token);
        } else {
            out.push_back(Tokenized::Token(token));
        }
    }

    fn flush_group(&mut self, out: &mut VecDeque<Tokenized>) {
        if self.config.group_lines && !self.group.is_empty() {
            let tokens = mem::take(&mut self.group);
            out.push_back(Tokenized::Line(LineGroup { tokens }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(lines: &[&str], config: TokenizerConfig) -> Vec<Tokenized> {
        let mut scanner = Scanner::new(config);
        let mut out = VecDeque::new();
        for line in lines {
            scanner.scan_line(line, &mut out);
        }
        scanner.finish(&mut out);
        out.into_iter().collect()
    }

    fn tokens(lines: &[&str], config: TokenizerConfig) -> Vec<String> {
        scan(lines, config)
            .into_iter()
            .flat_map(Tokenized::into_tokens)
            .collect()
    }

    fn csv() -> TokenizerConfig {
        TokenizerConfig::new()
            .with_delimiters([','])
            .with_qualifiers(['"'])
    }

    #[test]
    fn test_plain_delimiters() {
        assert_eq!(tokens(&["a,b,c"], csv()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_delimiter_emits_nothing_more() {
        assert_eq!(tokens(&["a,b,"], csv()), vec!["a", "b"]);
    }

    #[test]
    fn test_consecutive_delimiters_produce_empty_token() {
        assert_eq!(tokens(&["a,,b"], csv()), vec!["a", "", "b"]);
        assert_eq!(
            tokens(&["a,,b"], csv().ignoring_consecutive_delimiters()),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_qualified_token_keeps_delimiters() {
        assert_eq!(tokens(&["\"a,b\",c"], csv()), vec!["a,b", "c"]);
    }

    #[test]
    fn test_whitespace_before_qualifier_is_discarded() {
        assert_eq!(tokens(&["x,   \"y z\",w"], csv()), vec!["x", "y z", "w"]);
    }

    #[test]
    fn test_qualifier_after_text_is_literal() {
        assert_eq!(tokens(&["ab\"cd,e"], csv()), vec!["ab\"cd", "e"]);
    }

    #[test]
    fn test_garbage_after_closing_qualifier_is_dropped() {
        assert_eq!(tokens(&["\"a\"junk,b"], csv()), vec!["a", "b"]);
        // The delimiter is consumed with the garbage, so no empty token follows
        assert_eq!(tokens(&["\"a\",,b"], csv()), vec!["a", "", "b"]);
    }

    #[test]
    fn test_doubled_qualifier_is_literal() {
        assert_eq!(tokens(&["\"say \"\"hi\"\"\",x"], csv()), vec!["say \"hi\"", "x"]);
    }

    #[test]
    fn test_doubled_qualifier_disabled_closes_instead() {
        let config = csv().no_double_qualifier();
        assert_eq!(tokens(&["\"a\"\"b\",c"], config), vec!["a", "c"]);
    }

    #[test]
    fn test_escape_character_embeds_qualifier() {
        let config = csv().no_double_qualifier().with_escapes(['\\']);
        assert_eq!(tokens(&["\"a\\\"b\",c"], config), vec!["a\"b", "c"]);
    }

    #[test]
    fn test_escape_not_followed_by_qualifier_is_literal() {
        let config = csv().with_escapes(['\\']);
        assert_eq!(tokens(&["\"a\\b\""], config), vec!["a\\b"]);
    }

    #[test]
    fn test_empty_quoted_token() {
        assert_eq!(tokens(&["\"\",a"], csv()), vec!["", "a"]);
    }

    #[test]
    fn test_unterminated_qualifier_closes_at_line_end() {
        assert_eq!(tokens(&["\"abc", "def"], csv()), vec!["abc", "def"]);
    }

    #[test]
    fn test_span_joins_lines() {
        let config = csv().spanning();
        assert_eq!(
            tokens(&["a,\"b", "c\",d"], config),
            vec!["a", "b\nc", "d"]
        );
    }

    #[test]
    fn test_span_uses_line_join() {
        let config = csv().spanning().with_line_join(" | ");
        assert_eq!(tokens(&["\"b", "", "c\""], config), vec!["b |  | c"]);
    }

    #[test]
    fn test_unclosed_span_has_no_trailing_join() {
        let config = csv().spanning();
        assert_eq!(tokens(&["\"b", "c"], config), vec!["b\nc"]);
    }

    #[test]
    fn test_group_lines() {
        let items = scan(&["a,b", "c"], csv().grouping_lines());
        assert_eq!(
            items,
            vec![
                Tokenized::Line(LineGroup {
                    tokens: vec!["a".into(), "b".into()]
                }),
                Tokenized::Line(LineGroup {
                    tokens: vec!["c".into()]
                }),
            ]
        );
    }

    #[test]
    fn test_group_absorbs_spanned_lines() {
        let items = scan(&["a,\"b", "c\",d", "e"], csv().grouping_lines().spanning());
        assert_eq!(
            items,
            vec![
                Tokenized::Line(LineGroup {
                    tokens: vec!["a".into(), "b\nc".into(), "d".into()]
                }),
                Tokenized::Line(LineGroup {
                    tokens: vec!["e".into()]
                }),
            ]
        );
    }

    #[test]
    fn test_blank_line_produces_no_group() {
        let items = scan(&["a", "", "b"], csv().grouping_lines());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_qualifier_wins_over_delimiter() {
        // '"' is both a delimiter and a qualifier
        let config = TokenizerConfig::new()
            .with_delimiters(['"', ' '])
            .with_qualifiers(['"']);
        assert_eq!(tokens(&["\"a b\" c"], config), vec!["a b", "c"]);
    }
}
