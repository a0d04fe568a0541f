//! On/off pulse stream
//!
//! One byte per time unit: `1` is key down, `0` is key up. A dot is one unit on and
//! one off, a dash three on and one off, and each space in the Morse string is one
//! more unit off. Any other character contributes nothing.

pub const ON: u8 = 1;
pub const OFF: u8 = 0;

pub fn to_pulses(morse: &str) -> Vec<u8> {
    let mut pulses = Vec::with_capacity(morse.len() * 2);
    for c in morse.chars() {
        match c {
            ' ' => pulses.push(OFF),
            '.' => pulses.extend_from_slice(&[ON, OFF]),
            '-' => pulses.extend_from_slice(&[ON, ON, ON, OFF]),
            _ => {}
        }
    }
    pulses
}
