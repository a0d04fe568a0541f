//! Symbol tables
//!
//! Static data shared by the encoder and decoder. The tables are declared as ordered
//! slices; lookup maps are built from them once, on first use, and never change after.
//!
//! Known ambiguities:
//!
//!     - `SN` and `VE` share the code `...-.`, and so do `CT` and `KA` (`-.-.-`).
//!       Decoding uses [PROSIGN_LABELS], which has exactly one label per code.
//!     - `AA` is also [NEW_LINE]. A `!AA` after another word on the line ends that line
//!       when decoded; on its own line it decodes as `[New Line]`.
//!     - Prosigns whose codes equal a character code (`AR` and `+`, `BT` and `=`,
//!       `KN` and `(`, `AS` and `&`) are left out of [PROSIGNS] so every character
//!       decodes back to itself. `AR` still ends every message, see [END_OF_MESSAGE].

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Separates the letters of a word (3 units)
pub const LETTER_GAP: &str = "   ";

/// Separates words (7 units)
pub const WORD_GAP: &str = "       ";

/// `AA`, written after every encoded line
pub const NEW_LINE: &str = ".-.-";

/// `AR`, written once after the last line
pub const END_OF_MESSAGE: &str = ".-.-.";

pub static LETTERS: [(char, &str); 26] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
];

pub static DIGITS: [(char, &str); 10] = [
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

pub static PUNCTUATION: [(char, &str); 18] = [
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

/// Prosigns written in text as `!NAME`, e.g. `!SOS`
pub static PROSIGNS: [(&str, &str); 10] = [
    ("AA", ".-.-"),
    ("BK", "-...-.-"),
    ("CL", "-.-..-.."),
    ("CT", "-.-.-"),
    ("HH", "........"),
    ("KA", "-.-.-"),
    ("SK", "...-.-"),
    ("SN", "...-."),
    ("VE", "...-."),
    ("SOS", "...---..."),
];

/// Human readable label per prosign code, used when decoding
pub static PROSIGN_LABELS: [(&str, &str); 8] = [
    (".-.-", "New Line"),
    ("-...-.-", "Break"),
    ("-.-..-..", "Closing Down"),
    ("-.-.-", "Attention"),
    ("........", "Error"),
    ("...-.-", "End of Contact"),
    ("...-.", "Verified"),
    ("...---...", "Distress"),
];

/// Common phrases and their shorthand, applied in this order
pub static PHRASES: [(&str, &str); 14] = [
    ("love and kisses", "88"),
    ("best regards", "73"),
    ("see you later", "CUL"),
    ("good morning", "GM"),
    ("good afternoon", "GA"),
    ("good evening", "GE"),
    ("good night", "GN"),
    ("thank you", "TU"),
    ("thanks", "TNX"),
    ("please", "PSE"),
    ("message", "MSG"),
    ("weather", "WX"),
    ("signal report", "RST"),
    ("received", "RCVD"),
];

/// Q-codes, applied after [PHRASES], in this order
pub static Q_CODES: [(&str, &str); 11] = [
    ("reduce power", "QRP"),
    ("increase power", "QRO"),
    ("interference", "QRM"),
    ("atmospheric noise", "QRN"),
    ("send slower", "QRS"),
    ("send faster", "QRQ"),
    ("stand by", "QRX"),
    ("change frequency", "QSY"),
    ("signals are fading", "QSB"),
    ("acknowledge receipt", "QSL"),
    ("my location is", "QTH"),
];

static ENCODE: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    LETTERS
        .iter()
        .chain(DIGITS.iter())
        .chain(PUNCTUATION.iter())
        .copied()
        .collect()
});

static DECODE: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    LETTERS
        .iter()
        .chain(DIGITS.iter())
        .chain(PUNCTUATION.iter())
        .map(|&(c, code)| (code, c))
        .collect()
});

static PROSIGN_CODES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PROSIGNS.iter().copied().collect());

static LABELS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PROSIGN_LABELS.iter().copied().collect());

/// Morse code for a letter, digit or punctuation mark. Letters are matched case
/// insensitively (ASCII only).
pub fn symbol_for(c: char) -> Option<&'static str> {
    ENCODE.get(&c.to_ascii_uppercase()).copied()
}

/// The character a code stands for, if any
pub fn char_for(code: &str) -> Option<char> {
    DECODE.get(code).copied()
}

/// Code of a prosign by name (`"SOS"`, not `"!SOS"`)
pub fn prosign_code(name: &str) -> Option<&'static str> {
    PROSIGN_CODES.get(name).copied()
}

pub fn prosign_label(code: &str) -> Option<&'static str> {
    LABELS.get(code).copied()
}

/// Phrase and Q-code substitutions in the order the encoder applies them
pub fn substitutions() -> impl Iterator<Item = (&'static str, &'static str)> {
    PHRASES.iter().chain(Q_CODES.iter()).copied()
}
