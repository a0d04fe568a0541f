//! Text to Morse
//!
//!     Per input line (empty and whitespace-only lines are skipped):
//!         1. Upper case (ASCII) the line.
//!         2. Substitute phrases, then Q-codes, in table order.
//!         3. Pad every `!NAME` prosign mention with spaces so it becomes its own word.
//!         4. Split into words with the tokenizer (space and tab, runs collapsed).
//!         5. Map each word: a prosign marker becomes its code, anything else is mapped
//!            character by character. Each symbol is followed by the inter-letter gap,
//!            each word by the inter-word gap, and the doubled gap at a word end is then
//!            collapsed to a single inter-word gap.
//!         6. Close the line with the new-line prosign.
//!
//!     The message is closed with the end-of-message prosign.
//!
//!     This departs from a plain gap after every word: whitespace-only lines, and lines
//!     or words with nothing mappable, add nothing to the output, not even a gap.

use super::pulses::to_pulses;
use super::tables::{
    prosign_code, substitutions, symbol_for, END_OF_MESSAGE, LETTER_GAP, NEW_LINE, PROSIGNS,
    WORD_GAP,
};
use super::MorseError;
use crate::tokenizer::lines::physical_lines;
use crate::tokenizer::{tokenize, Tokenized, TokenizerConfig};
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

/// Word splitting for the encoder. No qualifiers, so `"` is encoded like any other mark.
static WORD_SPLIT: Lazy<TokenizerConfig> = Lazy::new(|| {
    TokenizerConfig::new()
        .with_delimiters([' ', '\t'])
        .ignoring_consecutive_delimiters()
});

/// Upper cased phrase text paired with its shorthand, in application order
static SUBSTITUTIONS: Lazy<Vec<(String, &'static str)>> = Lazy::new(|| {
    substitutions()
        .map(|(phrase, code)| (phrase.to_ascii_uppercase(), code))
        .collect()
});

/// The two mutually exclusive encoder inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeInput {
    Lines(Vec<String>),
    File(PathBuf),
}

/// Encoder output: the Morse string, or its on/off pulses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    Text(String),
    Pulses(Vec<u8>),
}

impl Encoded {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Encoded::Text(text) => Some(text),
            Encoded::Pulses(_) => None,
        }
    }

    pub fn as_pulses(&self) -> Option<&[u8]> {
        match self {
            Encoded::Text(_) => None,
            Encoded::Pulses(pulses) => Some(pulses),
        }
    }
}

/// Encode `lines` into a Morse string
pub fn encode_text<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut morse = String::new();
    for element in lines {
        for line in physical_lines(element.as_ref()) {
            encode_line(line, &mut morse);
        }
    }
    morse.push_str(END_OF_MESSAGE);
    morse
}

/// Encode `lines`, as pulses when `binary` is set
pub fn encode<I, S>(lines: I, binary: bool) -> Encoded
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let morse = encode_text(lines);
    if binary {
        Encoded::Pulses(to_pulses(&morse))
    } else {
        Encoded::Text(morse)
    }
}

/// Encode the lines of a text file
pub fn encode_file(path: impl AsRef<Path>, binary: bool) -> Result<Encoded, MorseError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| MorseError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(encode([source], binary))
}

pub fn encode_input(input: &EncodeInput, binary: bool) -> Result<Encoded, MorseError> {
    match input {
        EncodeInput::Lines(lines) => Ok(encode(lines, binary)),
        EncodeInput::File(path) => encode_file(path, binary),
    }
}

fn encode_line(line: &str, morse: &mut String) {
    if line.trim().is_empty() {
        return;
    }

    let text = prepare_line(line);
    let mut encoded = String::new();

    for word in tokenize([text.as_str()], &WORD_SPLIT).flat_map(Tokenized::into_tokens) {
        let symbols = encode_word(&word);
        if symbols.is_empty() {
            continue;
        }
        encoded.push_str(&symbols);
        encoded.push_str(WORD_GAP);
    }

    if encoded.is_empty() {
        tracing::debug!(line, "line has nothing to encode");
        return;
    }

    morse.push_str(&encoded.replace(&format!("{}{}", WORD_GAP, LETTER_GAP), WORD_GAP));
    morse.push_str(NEW_LINE);
    morse.push_str(LETTER_GAP);
}

/// Upper case the line and apply phrase, Q-code and prosign substitutions
fn prepare_line(line: &str) -> String {
    let mut text = line.to_ascii_uppercase();
    for (phrase, code) in SUBSTITUTIONS.iter() {
        text = text.replace(phrase.as_str(), code);
    }
    for (name, _) in PROSIGNS.iter() {
        let marker = format!("!{}", name);
        text = text.replace(&marker, &format!(" {} ", marker));
    }
    text
}

fn encode_word(word: &str) -> String {
    let mut symbols = String::new();

    if let Some(code) = word.strip_prefix('!').and_then(prosign_code) {
        symbols.push_str(code);
        symbols.push_str(LETTER_GAP);
        return symbols;
    }

    for c in word.chars() {
        match symbol_for(c) {
            Some(code) => {
                symbols.push_str(code);
                symbols.push_str(LETTER_GAP);
            }
            None => tracing::trace!(character = %c, "no symbol, skipped"),
        }
    }
    symbols
}
