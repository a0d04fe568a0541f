//! Tokenizer
//!
//!     Turns one or more input lines into a sequence of tokens according to a
//!     [TokenizerConfig]: which characters delimit tokens, which characters quote
//!     (qualify) a token so delimiters inside it are literal, and which characters
//!     escape a qualifier inside a quoted token.
//!
//! The Pipeline
//!
//!     1. Physical lines. Every input element is split on `\r\n`, `\r` and `\n`, so a
//!        single string with embedded breaks behaves exactly like an array holding one
//!        element per line. See [lines](lines).
//!
//!     2. Scanning. A single cursor walks each physical line, switching between the
//!        `Normal` and `InQualifier` states. Scan state survives across lines so a
//!        quoted token may span them when the config allows it. See [scanner](scanner).
//!
//!     3. Streaming. [TokenStream] pulls one input element at a time and hands out
//!        tokens (or whole line groups) as soon as they are complete.
//!
//! Lenience
//!
//!     The tokenizer never fails. Unterminated quotes are closed at the end of the line
//!     (or of the input, when spanning), and anything between a closing qualifier and
//!     the next delimiter is dropped.

pub mod config;
pub mod lines;
pub mod scanner;
pub mod stream;

pub use config::TokenizerConfig;
pub use stream::{tokenize, TokenStream};

use serde::Serialize;

/// One logical input line worth of tokens.
///
/// A logical line may have absorbed several physical lines when a qualified token
/// spanned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineGroup {
    pub tokens: Vec<String>,
}

/// An item produced by the tokenizer.
///
/// `Line` only appears when [TokenizerConfig::group_lines] is set; otherwise every
/// item is a `Token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tokenized {
    Token(String),
    Line(LineGroup),
}

impl Tokenized {
    /// The token text, if this item is a single token
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Tokenized::Token(token) => Some(token),
            Tokenized::Line(_) => None,
        }
    }

    /// Flatten into plain tokens, whichever variant this is
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            Tokenized::Token(token) => vec![token],
            Tokenized::Line(group) => group.tokens,
        }
    }
}

/// Tokenize a single piece of text and collect plain tokens.
///
/// Line groups are flattened, so this is mostly useful for quick splits and tests.
pub fn tokenize_str(text: &str, config: &TokenizerConfig) -> Vec<String> {
    tokenize([text], config)
        .flat_map(Tokenized::into_tokens)
        .collect()
}
