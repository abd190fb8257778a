use crate::fretboard::pitch::{string_name, StringGroup, StringGroupLabel};
use crate::theory::layout::VoicingFamily;
use crate::theory::tension::TensionSubstitution;
use crate::types::chord::Chord;
use crate::types::note::Note;
use std::collections::BTreeMap;
use std::fmt;

/// One fretted note inside a voicing map, keyed by string name
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VoicedNote {
    pub note: String,
    pub fret: u8,
}

/// Boundary shape consumed by the fretboard UI: string name ->
/// { note, fret }, one entry per voice
pub type VoicingMap = BTreeMap<&'static str, VoicedNote>;

/// A single playable voicing produced by the search engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voicing {
    pub chord: Chord,
    pub family: VoicingFamily,
    /// Inversion label named from the bass degree
    pub inversion: String,
    /// Degree occupying each voice, low to high (9/11/13 in a
    /// tension-substituted slot)
    pub degrees: [u8; 4],
    /// String group, low to high voice
    pub group: StringGroup,
    /// Frets aligned with the group
    pub frets: [u8; 4],
    /// Realized MIDI pitches, strictly ascending
    pub midis: [u8; 4],
    /// The tension recipe applied, if any
    pub substitution: Option<TensionSubstitution>,
}

impl Voicing {
    pub fn fret_span(&self) -> u8 {
        let min = *self.frets.iter().min().unwrap_or(&0);
        let max = *self.frets.iter().max().unwrap_or(&0);
        max - min
    }

    pub fn group_label(&self) -> StringGroupLabel {
        StringGroupLabel::classify(&self.group)
    }

    /// Lowest-pitched string of the voicing
    pub fn bass_string(&self) -> u8 {
        self.group[0]
    }

    /// Highest-pitched string of the voicing
    pub fn melody_string(&self) -> u8 {
        self.group[3]
    }

    /// Sounding pitch class of each voice, low to high
    pub fn notes(&self) -> [Note; 4] {
        self.midis.map(|m| Note::from_semitones(m as i32))
    }

    /// Quality-spelled degree labels, low to high (e.g. 5 1 3 b7)
    pub fn degree_labels(&self) -> [String; 4] {
        self.degrees.map(|d| self.chord.quality.degree_label(d))
    }

    /// Display quality, with the tension badge when one applies
    /// (e.g. "Min 7 (9 for R)")
    pub fn display_quality(&self) -> String {
        match &self.substitution {
            Some(sub) => format!("{} ({})", self.chord.quality.display_name(), sub.label()),
            None => self.chord.quality.display_name(),
        }
    }

    /// Whether the voicing sounds the exact fretted position
    pub fn contains_position(&self, string: u8, fret: u8) -> bool {
        self.group
            .iter()
            .zip(self.frets.iter())
            .any(|(&s, &f)| s == string && f == fret)
    }

    /// Whether the voicing sounds every pinned (string, fret) pair;
    /// used to narrow results when several fretboard notes are selected
    pub fn contains_all(&self, pins: &[(u8, u8)]) -> bool {
        pins.iter().all(|&(s, f)| self.contains_position(s, f))
    }

    /// True when any two voices form a compound minor ninth (13
    /// semitones, or an octave more) - the classic "b9 clash" the UI
    /// warns about
    pub fn has_flat_nine_clash(&self) -> bool {
        for i in 0..4 {
            for j in (i + 1)..4 {
                let interval = self.midis[j] as i32 - self.midis[i] as i32;
                if interval > 1 && interval % 12 == 1 {
                    return true;
                }
            }
        }
        false
    }

    /// Build the string-name keyed map the UI highlights from
    pub fn voicing_map(&self) -> VoicingMap {
        let notes = self.notes();
        let mut map = BTreeMap::new();
        for voice in 0..4 {
            map.insert(
                string_name(self.group[voice]),
                VoicedNote {
                    note: notes[voice].name().to_string(),
                    fret: self.frets[voice],
                },
            );
        }
        map
    }

    /// Total ordering key for deterministic result lists: group rank,
    /// then root name, quality label, inversion label, string set,
    /// frets, tension tag
    pub fn sort_key(&self) -> VoicingSortKey {
        (
            self.group_label().rank(),
            self.chord.root.name().to_string(),
            self.chord.quality.display_name(),
            self.inversion.clone(),
            self.group,
            self.frets,
            self.substitution.map(|s| s.label()).unwrap_or_default(),
        )
    }
}

pub type VoicingSortKey = (u8, String, String, String, StringGroup, [u8; 4], String);

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self.degree_labels().join(" ");
        let frets: Vec<String> = self.frets.iter().map(|fr| fr.to_string()).collect();
        write!(
            f,
            "{} - {} Inv {} - {} - R{} - [ {} ]",
            self.chord.symbol(),
            self.inversion,
            self.family.label(),
            degrees,
            self.bass_string(),
            frets.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quality::ChordQuality;

    fn sample() -> Voicing {
        Voicing {
            chord: Chord::new(5, "G".parse().unwrap(), ChordQuality::Dom7, [0, 4, 7, 10]),
            family: VoicingFamily::Drop2,
            inversion: "2nd".to_string(),
            degrees: [5, 1, 3, 7],
            group: [6, 5, 4, 3],
            frets: [10, 10, 9, 10],
            midis: [50, 55, 59, 65],
            substitution: None,
        }
    }

    #[test]
    fn test_span_and_strings() {
        let v = sample();
        assert_eq!(v.fret_span(), 1);
        assert_eq!(v.bass_string(), 6);
        assert_eq!(v.melody_string(), 3);
        assert_eq!(v.group_label(), StringGroupLabel::Bottom);
    }

    #[test]
    fn test_degree_labels_spelled_for_quality() {
        let labels = sample().degree_labels();
        assert_eq!(labels, ["5", "1", "3", "b7"].map(String::from));
    }

    #[test]
    fn test_position_queries() {
        let v = sample();
        assert!(v.contains_position(5, 10));
        assert!(!v.contains_position(5, 9));
        assert!(v.contains_all(&[(6, 10), (4, 9)]));
        assert!(!v.contains_all(&[(6, 10), (4, 8)]));
    }

    #[test]
    fn test_voicing_map_shape() {
        let map = sample().voicing_map();
        assert_eq!(map.len(), 4);
        let entry = map.get("a").unwrap();
        assert_eq!(entry.note, "G");
        assert_eq!(entry.fret, 10);
        assert_eq!(map.get("low-e").unwrap().note, "D");
    }

    #[test]
    fn test_flat_nine_clash_detection() {
        let mut v = sample();
        assert!(!v.has_flat_nine_clash());
        // E on top of a D# bass: 13 semitones apart
        v.midis = [51, 55, 59, 64];
        assert!(v.has_flat_nine_clash());
    }

    #[test]
    fn test_row_display() {
        assert_eq!(
            sample().to_string(),
            "G7 - 2nd Inv Drop 2 - 5 1 3 b7 - R6 - [ 10 10 9 10 ]"
        );
    }
}
