//! Streaming tokenization
//!
//! [TokenStream] is a pull based iterator: it reads the next input element only when
//! every item from the previous one has been handed out, so callers can stop early or
//! feed it from a lazily produced source (a file reader, stdin lines, ...).

use super::config::TokenizerConfig;
use super::lines::physical_lines;
use super::scanner::Scanner;
use super::Tokenized;
use std::collections::VecDeque;

/// Lazy sequence of tokens (or line groups) over a sequence of input lines.
#[derive(Debug)]
pub struct TokenStream<I> {
    lines: I,
    scanner: Scanner,
    pending: VecDeque<Tokenized>,
    finished: bool,
}

/// Tokenize `lines` with `config`.
///
/// Each element may itself contain line breaks; it is split into physical lines before
/// scanning. Scan state carries over between elements, so a spanning quoted token can
/// start in one element and close in a later one.
pub fn tokenize<I, S>(lines: I, config: &TokenizerConfig) -> TokenStream<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TokenStream {
        lines: lines.into_iter(),
        scanner: Scanner::new(config.clone()),
        pending: VecDeque::new(),
        finished: false,
    }
}

impl<I, S> Iterator for TokenStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Tokenized;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(item);
            }
            if self.finished {
                return None;
            }
            match self.lines.next() {
                Some(element) => {
                    for line in physical_lines(element.as_ref()) {
                        self.scanner.scan_line(line, &mut self.pending);
                    }
                }
                None => {
                    self.scanner.finish(&mut self.pending);
                    self.finished = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn collect(lines: &[&str], config: &TokenizerConfig) -> Vec<String> {
        tokenize(lines.iter(), config)
            .flat_map(Tokenized::into_tokens)
            .collect()
    }

    #[test]
    fn test_embedded_breaks_match_array_input() {
        let config = TokenizerConfig::default().spanning();
        let joined = collect(&["a \"b\r\nc\" d\ne"], &config);
        let split = collect(&["a \"b", "c\" d", "e"], &config);
        assert_eq!(joined, split);
        assert_eq!(joined, vec!["a", "b\nc", "d", "e"]);
    }

    #[test]
    fn test_embedded_breaks_with_groups() {
        let config = TokenizerConfig::default().grouping_lines();
        let items: Vec<_> = tokenize(["a b\nc"], &config).collect();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_pulls_input_lazily() {
        let pulled = Cell::new(0);
        let source = ["a b", "c d", "e f"].into_iter().inspect(|_| {
            pulled.set(pulled.get() + 1);
        });
        let mut stream = tokenize(source, &TokenizerConfig::default());

        assert_eq!(stream.next(), Some(Tokenized::Token("a".into())));
        assert_eq!(pulled.get(), 1);
        assert_eq!(stream.next(), Some(Tokenized::Token("b".into())));
        assert_eq!(pulled.get(), 1);
        assert_eq!(stream.next(), Some(Tokenized::Token("c".into())));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_spanning_token_waits_for_later_element() {
        let config = TokenizerConfig::default().spanning();
        let mut stream = tokenize(["x \"open", "still", "closed\" y"], &config);
        assert_eq!(stream.next(), Some(Tokenized::Token("x".into())));
        assert_eq!(
            stream.next(),
            Some(Tokenized::Token("open\nstill\nclosed".into()))
        );
        assert_eq!(stream.next(), Some(Tokenized::Token("y".into())));
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(tokenize(empty, &TokenizerConfig::default()).count(), 0);
    }
}
