use crate::types::note::Note;

/// Open-string MIDI values for standard tuning, indexed by string
/// number - 1. String 1 is the high E, string 6 the low E.
pub const OPEN_STRING_MIDI: [u8; 6] = [64, 59, 55, 50, 45, 40];

/// Highest fret considered anywhere in the engine
pub const MAX_FRET: u8 = 24;

/// An ordered 4-string window, listed low to high pitch (so string
/// numbers descend, e.g. [5, 4, 3, 2])
pub type StringGroup = [u8; 4];

/// The three adjacent 4-string windows used for closed and drop-2
/// voicings, low group first
pub const ADJACENT_GROUPS: [StringGroup; 3] = [[6, 5, 4, 3], [5, 4, 3, 2], [4, 3, 2, 1]];

/// Drop-3 windows: the bass voice skips one interior string because it
/// sits two octaves under the melody voice
pub const DROP3_GROUPS: [StringGroup; 2] = [[6, 4, 3, 2], [5, 3, 2, 1]];

/// MIDI pitch at a fretted position. `string` must be 1-6.
pub fn midi_at(string: u8, fret: u8) -> u8 {
    OPEN_STRING_MIDI[(string - 1) as usize] + fret
}

/// Pitch class sounding at a fretted position. `string` must be 1-6.
pub fn pitch_class_at(string: u8, fret: u8) -> Note {
    Note::from_semitones(midi_at(string, fret) as i32)
}

/// Every fret 0..=max_fret on a string that sounds the target pitch
/// class, in ascending order (hits repeat every 12 frets).
pub fn frets_producing(string: u8, target: Note, max_fret: u8) -> Vec<u8> {
    (0..=max_fret)
        .filter(|&fret| pitch_class_at(string, fret) == target)
        .collect()
}

/// App-facing string identifier used in voicing maps
pub fn string_name(string: u8) -> &'static str {
    match string {
        1 => "high-e",
        2 => "b",
        3 => "g",
        4 => "d",
        5 => "a",
        6 => "low-e",
        _ => "?",
    }
}

/// Named category of a string group, used as the leading sort key for
/// result ordering (top < middle < bottom < custom)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StringGroupLabel {
    Top,
    Middle,
    Bottom,
    Custom,
}

impl StringGroupLabel {
    pub fn classify(group: &StringGroup) -> Self {
        match group {
            [4, 3, 2, 1] => StringGroupLabel::Top,
            [5, 4, 3, 2] => StringGroupLabel::Middle,
            [6, 5, 4, 3] => StringGroupLabel::Bottom,
            _ => StringGroupLabel::Custom,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            StringGroupLabel::Top => 0,
            StringGroupLabel::Middle => 1,
            StringGroupLabel::Bottom => 2,
            StringGroupLabel::Custom => 99,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StringGroupLabel::Top => "top",
            StringGroupLabel::Middle => "middle",
            StringGroupLabel::Bottom => "bottom",
            StringGroupLabel::Custom => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_string_pitches() {
        let names: Vec<&str> = (1..=6).map(|s| pitch_class_at(s, 0).name()).collect();
        assert_eq!(names, vec!["E", "B", "G", "D", "A", "E"]);
    }

    #[test]
    fn test_midi_at() {
        assert_eq!(midi_at(2, 5), 64); // B string 5th fret = E4
        assert_eq!(midi_at(6, 0), 40);
    }

    #[test]
    fn test_frets_producing_periodicity() {
        let g: Note = "G".parse().unwrap();
        // A string: G at frets 10 and 22
        assert_eq!(frets_producing(5, g, 24), vec![10, 22]);

        let e: Note = "E".parse().unwrap();
        // Open high E repeats at 12 and 24
        assert_eq!(frets_producing(1, e, 24), vec![0, 12, 24]);
    }

    #[test]
    fn test_frets_producing_respects_max_fret() {
        let g: Note = "G".parse().unwrap();
        assert_eq!(frets_producing(5, g, 9), Vec::<u8>::new());
        assert_eq!(frets_producing(5, g, 10), vec![10]);
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(
            StringGroupLabel::classify(&[4, 3, 2, 1]),
            StringGroupLabel::Top
        );
        assert_eq!(
            StringGroupLabel::classify(&[6, 4, 3, 2]),
            StringGroupLabel::Custom
        );
        assert!(StringGroupLabel::Top.rank() < StringGroupLabel::Bottom.rank());
    }

    #[test]
    fn test_string_names() {
        assert_eq!(string_name(1), "high-e");
        assert_eq!(string_name(6), "low-e");
    }
}
