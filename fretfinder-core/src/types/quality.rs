use std::fmt;

/// Chord quality tag derived from the (third, fifth, seventh) interval
/// signature of a stacked-thirds four-note chord.
///
/// The set is closed over every signature the supported scale catalog
/// can produce; anything else falls back to `Other`, which keeps its
/// raw intervals so exotic scales still yield usable (if unnamed)
/// chords instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Maj7,
    Min7,
    Dom7,
    Min7b5,
    Dim7,
    MinMaj7,
    AugMaj7,
    Aug7,
    Maj7b5,
    Dom7b5,
    Dom7sus4,
    Min7Sharp5,
    Six,
    SixFlat5,
    Min6,
    /// Unrecognized interval stack (third, fifth, seventh)
    Other(u8, u8, u8),
}

impl ChordQuality {
    /// Classify a chord by its root-relative intervals to the 3rd, 5th
    /// and 7th (all in semitones, mod 12).
    pub fn from_intervals(third: u8, fifth: u8, seventh: u8) -> Self {
        match (third, fifth, seventh) {
            (4, 7, 11) => ChordQuality::Maj7,
            (3, 7, 10) => ChordQuality::Min7,
            (4, 7, 10) => ChordQuality::Dom7,
            (3, 6, 10) => ChordQuality::Min7b5,
            (3, 6, 9) => ChordQuality::Dim7,
            (3, 7, 11) => ChordQuality::MinMaj7,
            (4, 8, 11) => ChordQuality::AugMaj7,
            (4, 8, 10) => ChordQuality::Aug7,
            (4, 6, 11) => ChordQuality::Maj7b5,
            (4, 6, 10) => ChordQuality::Dom7b5,
            (5, 7, 10) => ChordQuality::Dom7sus4,
            (3, 8, 10) => ChordQuality::Min7Sharp5,
            (4, 7, 9) => ChordQuality::Six,
            (4, 6, 9) => ChordQuality::SixFlat5,
            (3, 7, 9) => ChordQuality::Min6,
            (t, f, s) => ChordQuality::Other(t, f, s),
        }
    }

    /// Short quality key used in chord symbols (e.g. "m7b5" in "Bm7b5")
    pub fn key(&self) -> String {
        match self {
            ChordQuality::Maj7 => "maj7".to_string(),
            ChordQuality::Min7 => "m7".to_string(),
            ChordQuality::Dom7 => "7".to_string(),
            ChordQuality::Min7b5 => "m7b5".to_string(),
            ChordQuality::Dim7 => "dim7".to_string(),
            ChordQuality::MinMaj7 => "mMaj7".to_string(),
            ChordQuality::AugMaj7 => "augMaj7".to_string(),
            ChordQuality::Aug7 => "aug7".to_string(),
            ChordQuality::Maj7b5 => "maj7b5".to_string(),
            ChordQuality::Dom7b5 => "7b5".to_string(),
            ChordQuality::Dom7sus4 => "7sus4".to_string(),
            ChordQuality::Min7Sharp5 => "m7#5".to_string(),
            ChordQuality::Six => "6".to_string(),
            ChordQuality::SixFlat5 => "6b5".to_string(),
            ChordQuality::Min6 => "m6".to_string(),
            ChordQuality::Other(t, f, s) => format!("[{}-{}-{}]", t, f, s),
        }
    }

    /// Longer display name for result rows ("Min 7b5", "Dom 7", ...)
    pub fn display_name(&self) -> String {
        match self {
            ChordQuality::Maj7 => "Maj 7".to_string(),
            ChordQuality::Min7 => "Min 7".to_string(),
            ChordQuality::Dom7 => "Dom 7".to_string(),
            ChordQuality::Min7b5 => "Min 7b5".to_string(),
            ChordQuality::Dim7 => "Dim 7".to_string(),
            ChordQuality::MinMaj7 => "Min Maj7".to_string(),
            ChordQuality::AugMaj7 => "Aug Maj7".to_string(),
            ChordQuality::Aug7 => "Aug 7".to_string(),
            ChordQuality::Maj7b5 => "Maj 7b5".to_string(),
            ChordQuality::Dom7b5 => "Dom 7b5".to_string(),
            ChordQuality::Dom7sus4 => "Dom 7sus4".to_string(),
            ChordQuality::Min7Sharp5 => "Min 7#5".to_string(),
            ChordQuality::Six => "Maj 6".to_string(),
            ChordQuality::SixFlat5 => "Maj 6b5".to_string(),
            ChordQuality::Min6 => "Min 6".to_string(),
            other => other.key(),
        }
    }

    /// Display label for one of the four chord-tone slots (degree 1, 3,
    /// 5 or 7), spelled for this quality: the m7b5 fifth reads "b5",
    /// the dim7 seventh reads "bb7", the sixth-chord seventh slot is
    /// really a 6th, and so on. Unrecognized qualities use plain labels.
    pub fn degree_label(&self, degree: u8) -> String {
        let labels: [&str; 4] = match self {
            ChordQuality::Maj7 | ChordQuality::Maj7b5 => ["1", "3", "5", "7"],
            ChordQuality::Dom7 | ChordQuality::Dom7b5 => ["1", "3", "5", "b7"],
            ChordQuality::Min7 => ["1", "b3", "5", "b7"],
            ChordQuality::Min7b5 => ["1", "b3", "b5", "b7"],
            ChordQuality::Dim7 => ["1", "b3", "b5", "bb7"],
            ChordQuality::MinMaj7 => ["1", "b3", "5", "7"],
            ChordQuality::AugMaj7 => ["1", "3", "#5", "7"],
            ChordQuality::Aug7 => ["1", "3", "#5", "b7"],
            ChordQuality::Dom7sus4 => ["1", "4", "5", "b7"],
            ChordQuality::Min7Sharp5 => ["1", "b3", "#5", "b7"],
            ChordQuality::Six | ChordQuality::SixFlat5 => ["1", "3", "5", "6"],
            ChordQuality::Min6 => ["1", "b3", "5", "6"],
            ChordQuality::Other(..) => ["1", "3", "5", "7"],
        };
        match degree {
            1 => labels[0].to_string(),
            3 => labels[1].to_string(),
            5 => labels[2].to_string(),
            7 => labels[3].to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
