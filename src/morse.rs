//! Morse code
//!
//!     Text to Morse and back, plus the on/off pulse stream a keyer or sounder plays.
//!
//! Morse String Layout
//!
//!     Elements are `.` and `-`. Letters inside a word are separated by the inter-letter
//!     gap (3 spaces), words by the inter-word gap (7 spaces). Every encoded line ends
//!     with the new-line prosign followed by an inter-letter gap, and the message ends
//!     with the end-of-message prosign:
//!
//!         ....   ..       -   ....   .       .-.-   .-.-.
//!         H      I        T   H      E       (NL)   (EOM)
//!
//!     The decoder relies on exactly this layout, so it splits on the fixed separators
//!     instead of running the general tokenizer.
//!
//! Lossiness
//!
//!     Characters without a symbol are dropped while encoding, and unknown fragments are
//!     dropped while decoding. Letters come back upper case, and phrases come back as
//!     their shorthand. Neither direction ever fails on content.

pub mod decoder;
pub mod encoder;
pub mod playback;
pub mod pulses;
pub mod tables;

pub use decoder::{decode, decode_with};
pub use encoder::{encode, encode_file, encode_input, encode_text, EncodeInput, Encoded};
pub use playback::{
    play, play_morse, KeyState, Keyer, PlaybackError, PlaybackSettings, SleepKeyer, TimelineKeyer,
};
pub use pulses::to_pulses;

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorseError {
    /// The encoder input file could not be read
    Io { path: PathBuf, message: String },
    Playback(PlaybackError),
}

impl fmt::Display for MorseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorseError::Io { path, message } => {
                write!(f, "Cannot read '{}': {}", path.display(), message)
            }
            MorseError::Playback(err) => write!(f, "Playback failed: {}", err),
        }
    }
}

impl std::error::Error for MorseError {}

impl From<PlaybackError> for MorseError {
    fn from(err: PlaybackError) -> Self {
        MorseError::Playback(err)
    }
}
