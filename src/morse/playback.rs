//! Playback boundary
//!
//! Plays a pulse stream through a [Keyer]: one tone of one unit per `1` byte, one unit
//! of silence per `0` byte. Units are never merged, so any keyer that honors the
//! durations reproduces the exact timing of the stream.
//!
//! Producing sound is the keyer's business. [TimelineKeyer] only records what it was
//! asked to do; [SleepKeyer] blocks for each unit and rings the terminal bell on key
//! down.

use super::pulses::to_pulses;
use super::MorseError;
use std::fmt;
use std::io::Write;
use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

pub const UNIT_RANGE_MS: RangeInclusive<u64> = 50..=500;
pub const FREQUENCY_RANGE_HZ: RangeInclusive<u32> = 37..=32767;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    UnitOutOfRange(u64),
    FrequencyOutOfRange(u32),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::UnitOutOfRange(ms) => write!(
                f,
                "unit of {} ms is outside {}..={} ms",
                ms,
                UNIT_RANGE_MS.start(),
                UNIT_RANGE_MS.end()
            ),
            PlaybackError::FrequencyOutOfRange(hz) => write!(
                f,
                "frequency of {} Hz is outside {}..={} Hz",
                hz,
                FREQUENCY_RANGE_HZ.start(),
                FREQUENCY_RANGE_HZ.end()
            ),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Unit length and tone pitch, validated on construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    unit: Duration,
    frequency_hz: u32,
}

impl PlaybackSettings {
    pub fn new(unit_ms: u64, frequency_hz: u32) -> Result<Self, PlaybackError> {
        if !UNIT_RANGE_MS.contains(&unit_ms) {
            return Err(PlaybackError::UnitOutOfRange(unit_ms));
        }
        if !FREQUENCY_RANGE_HZ.contains(&frequency_hz) {
            return Err(PlaybackError::FrequencyOutOfRange(frequency_hz));
        }
        Ok(Self {
            unit: Duration::from_millis(unit_ms),
            frequency_hz,
        })
    }

    #[inline]
    pub fn unit(&self) -> Duration {
        self.unit
    }

    #[inline]
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    /// Total playing time of a pulse stream
    pub fn duration_of(&self, pulses: &[u8]) -> Duration {
        self.unit * pulses.len() as u32
    }
}

/// Key state for one recorded segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Down,
    Up,
}

pub trait Keyer {
    fn tone(&mut self, frequency_hz: u32, duration: Duration);
    fn silence(&mut self, duration: Duration);
}

/// Play `pulses` through `keyer`. Any non-zero byte counts as key down.
pub fn play<K: Keyer + ?Sized>(pulses: &[u8], settings: &PlaybackSettings, keyer: &mut K) {
    tracing::debug!(
        units = pulses.len(),
        unit_ms = settings.unit.as_millis() as u64,
        frequency_hz = settings.frequency_hz,
        "playing pulse stream"
    );
    for &pulse in pulses {
        if pulse != 0 {
            keyer.tone(settings.frequency_hz, settings.unit);
        } else {
            keyer.silence(settings.unit);
        }
    }
}

/// Validate the settings, then play the pulses of a Morse string
pub fn play_morse<K: Keyer + ?Sized>(
    morse: &str,
    unit_ms: u64,
    frequency_hz: u32,
    keyer: &mut K,
) -> Result<(), MorseError> {
    let settings = PlaybackSettings::new(unit_ms, frequency_hz)?;
    play(&to_pulses(morse), &settings, keyer);
    Ok(())
}

/// Records every segment it is asked to play
#[derive(Debug, Default, Clone)]
pub struct TimelineKeyer {
    pub segments: Vec<(KeyState, Duration)>,
    pub frequencies: Vec<u32>,
}

impl TimelineKeyer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all recorded segments
    pub fn total(&self) -> Duration {
        self.segments.iter().map(|(_, duration)| *duration).sum()
    }

    /// Key state per unit, as the pulse bytes that produced it
    pub fn as_pulses(&self) -> Vec<u8> {
        self.segments
            .iter()
            .map(|(state, _)| match state {
                KeyState::Down => 1,
                KeyState::Up => 0,
            })
            .collect()
    }
}

impl Keyer for TimelineKeyer {
    fn tone(&mut self, frequency_hz: u32, duration: Duration) {
        self.segments.push((KeyState::Down, duration));
        self.frequencies.push(frequency_hz);
    }

    fn silence(&mut self, duration: Duration) {
        self.segments.push((KeyState::Up, duration));
    }
}

/// Blocks for every unit; rings the bell on `out` at each key down edge
pub struct SleepKeyer<W: Write> {
    out: W,
    key_down: bool,
}

impl<W: Write> SleepKeyer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            key_down: false,
        }
    }
}

impl<W: Write> Keyer for SleepKeyer<W> {
    fn tone(&mut self, _frequency_hz: u32, duration: Duration) {
        if !self.key_down {
            // Bell write failures are ignored
            let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
            self.key_down = true;
        }
        thread::sleep(duration);
    }

    fn silence(&mut self, duration: Duration) {
        self.key_down = false;
        thread::sleep(duration);
    }
}
