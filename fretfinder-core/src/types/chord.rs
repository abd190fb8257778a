use crate::types::note::Note;
use crate::types::quality::ChordQuality;
use std::fmt;

/// A diatonic four-note chord: root, quality tag, and its semitone
/// formula `[0, third, fifth, seventh]` relative to the root.
///
/// Built once per query by the scale model and treated as immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    /// Scale degree this chord was stacked on (1-7). Derived sixth
    /// chords keep the degree of the m7/m7b5 chord they came from.
    pub degree: u8,
    pub root: Note,
    pub quality: ChordQuality,
    pub formula: [u8; 4],
}

impl Chord {
    pub fn new(degree: u8, root: Note, quality: ChordQuality, formula: [u8; 4]) -> Self {
        Chord {
            degree,
            root,
            quality,
            formula,
        }
    }

    /// The four absolute pitch classes of the chord tones
    pub fn tones(&self) -> [Note; 4] {
        [
            self.root.transpose(self.formula[0] as i32),
            self.root.transpose(self.formula[1] as i32),
            self.root.transpose(self.formula[2] as i32),
            self.root.transpose(self.formula[3] as i32),
        ]
    }

    /// Whether a pitch class is one of the chord tones
    pub fn contains(&self, note: Note) -> bool {
        self.tones().contains(&note)
    }

    /// Chord symbol, e.g. "Fmaj7", "Bm7b5"
    pub fn symbol(&self) -> String {
        format!("{}{}", self.root.name(), self.quality.key())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
