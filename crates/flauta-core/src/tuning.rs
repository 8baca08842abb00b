//! Equal-tempered pitch conversions and scale tables.
//!
//! Hole frequencies can be supplied directly in Hz or derived from MIDI note
//! numbers and cents offsets; everything here is plain equal temperament
//! around A4 = 440 Hz.

use libm::{exp2, log2, round};

/// MIDI note number of A4.
pub const MIDI_A4: f64 = 69.0;

/// Reference frequency of A4, Hz.
pub const A4_HZ: f64 = 440.0;

/// Semitone names within one octave, C first.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone offsets of the major scale.
pub const MAJOR_SCALE_INTERVALS: [f64; 7] = [0.0, 2.0, 4.0, 5.0, 7.0, 9.0, 11.0];

/// Frequency of an equal-tempered MIDI note.
///
/// Fractional note numbers are meaningful and land between semitones.
///
/// # Example
///
/// ```rust
/// use flauta_core::tuning::midi_to_frequency;
///
/// assert!((midi_to_frequency(69.0) - 440.0).abs() < 1e-9);
/// assert!((midi_to_frequency(60.0) - 261.6256).abs() < 1e-3); // C4
/// assert!((midi_to_frequency(81.0) - 880.0).abs() < 1e-9);
/// ```
#[inline]
pub fn midi_to_frequency(note: f64) -> f64 {
    A4_HZ * exp2((note - MIDI_A4) / 12.0)
}

/// Frequency at a cents offset above (or below) a fundamental.
///
/// # Example
///
/// ```rust
/// use flauta_core::tuning::cents_to_frequency;
///
/// // 1200 cents is one octave.
/// assert!((cents_to_frequency(261.63, 1200.0) - 523.26).abs() < 1e-9);
/// ```
#[inline]
pub fn cents_to_frequency(fundamental: f64, cents: f64) -> f64 {
    fundamental * exp2(cents / 1200.0)
}

/// Signed cents offset of `frequency` relative to `reference`.
#[inline]
pub fn frequency_to_cents(frequency: f64, reference: f64) -> f64 {
    1200.0 * log2(frequency / reference)
}

/// The frequencies of a major scale rooted at a MIDI note.
pub fn major_scale_frequencies(base_midi: f64) -> [f64; 7] {
    MAJOR_SCALE_INTERVALS.map(|interval| midi_to_frequency(base_midi + interval))
}

/// A frequency snapped to its nearest equal-tempered note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Semitone name, e.g. `"D#"`.
    pub name: &'static str,
    /// Scientific octave number (C4 = middle C).
    pub octave: i32,
    /// How far the input sits from the snapped note, in cents.
    pub cents_off: f64,
}

impl core::fmt::Display for Note {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

/// Snap a frequency to the nearest equal-tempered note.
///
/// # Example
///
/// ```rust
/// use flauta_core::tuning::nearest_note;
///
/// let note = nearest_note(446.0);
/// assert_eq!(note.to_string(), "A4");
/// assert!(note.cents_off > 0.0); // sharp of A4
/// ```
pub fn nearest_note(frequency: f64) -> Note {
    let semitones_from_a4 = 12.0 * log2(frequency / A4_HZ);
    let nearest = round(semitones_from_a4);
    let cents_off = (semitones_from_a4 - nearest) * 100.0;

    let midi = nearest as i64 + 69;
    let octave = (midi.div_euclid(12) - 1) as i32;
    let name = NOTE_NAMES[midi.rem_euclid(12) as usize];

    Note {
        name,
        octave,
        cents_off,
    }
}

/// A named pitch for fundamental pickers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedPitch {
    /// Semitone name.
    pub note: &'static str,
    /// Scientific octave number.
    pub octave: i32,
    /// Frequency, Hz.
    pub frequency: f64,
}

impl core::fmt::Display for NamedPitch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{} ({} Hz)", self.note, self.octave, self.frequency)
    }
}

/// Fundamentals commonly chosen for simple-system flutes, C4 through G#5.
pub const COMMON_FUNDAMENTALS: [NamedPitch; 21] = [
    NamedPitch { note: "C", octave: 4, frequency: 261.63 },
    NamedPitch { note: "C#", octave: 4, frequency: 277.18 },
    NamedPitch { note: "D", octave: 4, frequency: 293.66 },
    NamedPitch { note: "D#", octave: 4, frequency: 311.13 },
    NamedPitch { note: "E", octave: 4, frequency: 329.63 },
    NamedPitch { note: "F", octave: 4, frequency: 349.23 },
    NamedPitch { note: "F#", octave: 4, frequency: 369.99 },
    NamedPitch { note: "G", octave: 4, frequency: 392.0 },
    NamedPitch { note: "G#", octave: 4, frequency: 415.3 },
    NamedPitch { note: "A", octave: 4, frequency: 440.0 },
    NamedPitch { note: "A#", octave: 4, frequency: 466.16 },
    NamedPitch { note: "B", octave: 4, frequency: 493.88 },
    NamedPitch { note: "C", octave: 5, frequency: 523.25 },
    NamedPitch { note: "C#", octave: 5, frequency: 554.37 },
    NamedPitch { note: "D", octave: 5, frequency: 587.33 },
    NamedPitch { note: "D#", octave: 5, frequency: 622.25 },
    NamedPitch { note: "E", octave: 5, frequency: 659.25 },
    NamedPitch { note: "F", octave: 5, frequency: 698.46 },
    NamedPitch { note: "F#", octave: 5, frequency: 739.99 },
    NamedPitch { note: "G", octave: 5, frequency: 783.99 },
    NamedPitch { note: "G#", octave: 5, frequency: 830.61 },
];
