use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// A note name collapsed to its chromatic pitch class (0-11)
/// 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
///
/// Flat and enharmonic spellings are accepted on input and normalized
/// to sharps for display, matching the fretboard's sharp-only labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note {
    pitch_class: u8,
}

/// Sharp-normalized chromatic names, indexed by pitch class
const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl Note {
    /// Create a note from a chromatic pitch class (0-11)
    pub fn new(pitch_class: u8) -> Result<Self> {
        if pitch_class > 11 {
            return Err(anyhow!("Pitch class must be 0-11, got {}", pitch_class));
        }
        Ok(Note { pitch_class })
    }

    /// Create a note from any integer, wrapping modulo 12
    pub fn from_semitones(semitones: i32) -> Self {
        Note {
            pitch_class: semitones.rem_euclid(12) as u8,
        }
    }

    /// Get the chromatic pitch class (0-11)
    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    /// Sharp-normalized name of this pitch class
    pub fn name(&self) -> &'static str {
        CHROMATIC[self.pitch_class as usize]
    }

    /// Transpose by a number of semitones, wrapping within the octave
    pub fn transpose(self, semitones: i32) -> Note {
        Note::from_semitones(self.pitch_class as i32 + semitones)
    }

    /// Parse a key input the way the app's search bar does: trim
    /// whitespace, drop a trailing " major", then parse the note name.
    pub fn parse_key(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let stripped = trimmed
            .strip_suffix(" major")
            .or_else(|| trimmed.strip_suffix(" Major"))
            .unwrap_or(trimmed)
            .trim();
        stripped
            .parse()
            .map_err(|_| anyhow!("Unsupported key input: \"{}\"", raw))
    }
}

impl FromStr for Note {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        // Normalize case: note letter upper, accidental as-is ('b' stays
        // lower so "Bb" and "bb" both read as B-flat)
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| anyhow!("Empty note name"))?
            .to_ascii_uppercase();
        let rest: String = chars.collect();

        let pitch_class = match (letter, rest.as_str()) {
            ('C', "") => 0,
            ('B', "#") => 0,
            ('C', "#") => 1,
            ('D', "b") | ('D', "B") => 1,
            ('D', "") => 2,
            ('D', "#") => 3,
            ('E', "b") | ('E', "B") => 3,
            ('E', "") => 4,
            ('F', "b") | ('F', "B") => 4,
            ('F', "") => 5,
            ('E', "#") => 5,
            ('F', "#") => 6,
            ('G', "b") | ('G', "B") => 6,
            ('G', "") => 7,
            ('G', "#") => 8,
            ('A', "b") | ('A', "B") => 8,
            ('A', "") => 9,
            ('A', "#") => 10,
            ('B', "b") | ('B', "B") => 10,
            ('B', "") => 11,
            ('C', "b") | ('C', "B") => 11,
            _ => return Err(anyhow!("Invalid note name: {}", s)),
        };

        Ok(Note { pitch_class })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
