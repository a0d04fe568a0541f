//! # textmorse
//!
//! A configurable delimited-text tokenizer, and a Morse code codec built on top of it.
//!
//! File Layout
//!
//!     src/tokenizer     The character scanner: delimiters, qualifiers, escapes, spans
//!                       and per-line grouping. Produces a lazy stream of tokens.
//!     src/morse         Symbol tables, the encoder (which word-splits through the
//!                       tokenizer), the decoder, the on/off pulse stream and the
//!                       playback boundary.
//!     src/diagnostics   Advisory messages raised while decoding. They never change
//!                       control flow; callers choose where they go.
//!
//! Both halves are synchronous and keep all state local to one call, so separate
//! threads can tokenize or encode at the same time without interacting.

pub mod diagnostics;
pub mod morse;
pub mod tokenizer;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use morse::{decode, decode_with, encode, encode_file, to_pulses, Encoded, MorseError};
pub use tokenizer::{tokenize, tokenize_str, LineGroup, TokenStream, Tokenized, TokenizerConfig};
