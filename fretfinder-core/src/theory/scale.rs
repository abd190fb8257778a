use crate::types::chord::Chord;
use crate::types::note::Note;
use crate::types::quality::ChordQuality;

/// Every supported scale formula, keyed by display name. Non-7-note
/// entries (pentatonics, Blues, Whole Tone, Diminished, Chromatic) are
/// listed so the fretboard can render them, but they produce no
/// stacked-thirds chords.
pub const SCALE_FORMULAS: &[(&str, &[u8])] = &[
    // Major modes
    ("Major", &[0, 2, 4, 5, 7, 9, 11]),
    ("Dorian", &[0, 2, 3, 5, 7, 9, 10]),
    ("Phrygian", &[0, 1, 3, 5, 7, 8, 10]),
    ("Lydian", &[0, 2, 4, 6, 7, 9, 11]),
    ("Mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
    ("Natural Minor", &[0, 2, 3, 5, 7, 8, 10]),
    ("Locrian", &[0, 1, 3, 5, 6, 8, 10]),
    // Harmonic Minor modes
    ("Harmonic Minor", &[0, 2, 3, 5, 7, 8, 11]),
    ("Locrian #6", &[0, 1, 3, 5, 6, 9, 10]),
    ("Ionian Augmented", &[0, 2, 4, 5, 8, 9, 11]),
    ("Dorian #4", &[0, 2, 3, 6, 7, 9, 10]),
    ("Phrygian Dominant", &[0, 1, 4, 5, 7, 8, 10]),
    ("Lydian #2", &[0, 3, 4, 6, 7, 9, 11]),
    ("Super Locrian bb7", &[0, 1, 3, 4, 6, 8, 9]),
    // Melodic Minor modes
    ("Melodic Minor", &[0, 2, 3, 5, 7, 9, 11]),
    ("Dorian b2", &[0, 1, 3, 5, 7, 9, 10]),
    ("Lydian Augmented", &[0, 2, 4, 6, 8, 9, 11]),
    ("Lydian Dominant", &[0, 2, 4, 6, 7, 9, 10]),
    ("Mixolydian b6", &[0, 2, 4, 5, 7, 8, 10]),
    ("Locrian #2", &[0, 2, 3, 5, 6, 8, 10]),
    ("Super Locrian", &[0, 1, 3, 4, 6, 8, 10]),
    ("Altered", &[0, 1, 3, 4, 6, 8, 10]),
    // Other scales
    ("Pentatonic Major", &[0, 2, 4, 7, 9]),
    ("Pentatonic Minor", &[0, 3, 5, 7, 10]),
    ("Blues", &[0, 3, 5, 6, 7, 10]),
    ("Whole Tone", &[0, 2, 4, 6, 8, 10]),
    ("Diminished", &[0, 2, 3, 5, 6, 8, 9, 11]),
    ("Chromatic", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
];

/// Look up a scale formula by name (case-insensitive)
pub fn scale_formula(name: &str) -> Option<&'static [u8]> {
    SCALE_FORMULAS
        .iter()
        .find(|(scale_name, _)| scale_name.eq_ignore_ascii_case(name.trim()))
        .map(|(_, formula)| *formula)
}

/// All catalog scale names, in catalog order
pub fn scale_names() -> Vec<&'static str> {
    SCALE_FORMULAS.iter().map(|(name, _)| *name).collect()
}

/// The absolute pitch classes of a scale rooted at `root`
pub fn scale_pitch_classes(root: Note, formula: &[u8]) -> Vec<Note> {
    formula
        .iter()
        .map(|&step| root.transpose(step as i32))
        .collect()
}

/// Whether a pitch class belongs to the scale
pub fn contains_pitch(root: Note, formula: &[u8], note: Note) -> bool {
    scale_pitch_classes(root, formula).contains(&note)
}

/// Build the diatonic stacked-thirds 7th chords of a 7-note scale:
/// for each degree i the chord tones are scale[i], scale[i+2],
/// scale[i+4], scale[i+6] (wrapping), expressed as offsets from the
/// chord root and classified by interval signature.
///
/// Scales without exactly 7 notes support no stacked-thirds harmony
/// and yield an empty list; callers must treat that as "no chords",
/// not an error.
///
/// Every m7 chord additionally yields its enharmonic major-6th
/// equivalent rooted a minor third above (Am7 and C6 share all four
/// tones), and every m7b5 its minor-6th equivalent; these are appended
/// after the seven base chords.
pub fn diatonic_seventh_chords(root: Note, scale_name: &str) -> Vec<Chord> {
    let formula = match scale_formula(scale_name) {
        Some(f) if f.len() == 7 => f,
        _ => return Vec::new(),
    };

    let scale = scale_pitch_classes(root, formula);
    let mut chords = Vec::with_capacity(9);

    for i in 0..7 {
        let chord_root = scale[i];
        let third = interval_from(chord_root, scale[(i + 2) % 7]);
        let fifth = interval_from(chord_root, scale[(i + 4) % 7]);
        let seventh = interval_from(chord_root, scale[(i + 6) % 7]);

        let quality = ChordQuality::from_intervals(third, fifth, seventh);
        chords.push(Chord::new(
            (i + 1) as u8,
            chord_root,
            quality,
            [0, third, fifth, seventh],
        ));
    }

    let mut derived = Vec::new();
    for chord in &chords {
        match chord.quality {
            ChordQuality::Min7 => derived.push(Chord::new(
                chord.degree,
                chord.root.transpose(chord.formula[1] as i32),
                ChordQuality::Six,
                [0, 4, 7, 9],
            )),
            ChordQuality::Min7b5 => derived.push(Chord::new(
                chord.degree,
                chord.root.transpose(chord.formula[1] as i32),
                ChordQuality::Min6,
                [0, 3, 7, 9],
            )),
            _ => {}
        }
    }
    chords.extend(derived);

    chords
}

fn interval_from(root: Note, target: Note) -> u8 {
    (target.pitch_class() as i32 - root.pitch_class() as i32).rem_euclid(12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c() -> Note {
        "C".parse().unwrap()
    }

    #[test]
    fn test_c_major_seventh_chords() {
        let chords = diatonic_seventh_chords(c(), "Major");
        let base: Vec<String> = chords.iter().take(7).map(|ch| ch.symbol()).collect();
        assert_eq!(
            base,
            vec!["Cmaj7", "Dm7", "Em7", "Fmaj7", "G7", "Am7", "Bm7b5"]
        );
    }

    #[test]
    fn test_sixth_chord_derivation() {
        let chords = diatonic_seventh_chords(c(), "Major");
        let derived: Vec<String> = chords.iter().skip(7).map(|ch| ch.symbol()).collect();
        // Dm7 -> F6, Em7 -> G6, Am7 -> C6, Bm7b5 -> Dm6
        assert_eq!(derived, vec!["F6", "G6", "C6", "Dm6"]);

        let c6 = chords.iter().find(|ch| ch.symbol() == "C6").unwrap();
        assert_eq!(c6.formula, [0, 4, 7, 9]);
        let dm6 = chords.iter().find(|ch| ch.symbol() == "Dm6").unwrap();
        assert_eq!(dm6.formula, [0, 3, 7, 9]);

        // Enharmonic equivalence: Am7 and C6 share all four tones
        let am7 = chords.iter().find(|ch| ch.symbol() == "Am7").unwrap();
        let mut am7_tones: Vec<u8> = am7.tones().iter().map(|n| n.pitch_class()).collect();
        let mut c6_tones: Vec<u8> = c6.tones().iter().map(|n| n.pitch_class()).collect();
        am7_tones.sort();
        c6_tones.sort();
        assert_eq!(am7_tones, c6_tones);
    }

    #[test]
    fn test_harmonic_minor_qualities() {
        let chords = diatonic_seventh_chords(c(), "Harmonic Minor");
        assert_eq!(chords[0].quality, ChordQuality::MinMaj7);
        assert_eq!(chords[2].quality, ChordQuality::AugMaj7);
        assert_eq!(chords[4].quality, ChordQuality::Dom7);
        assert_eq!(chords[6].quality, ChordQuality::Dim7);
    }

    #[test]
    fn test_non_seven_note_scales_have_no_chords() {
        assert!(diatonic_seventh_chords(c(), "Pentatonic Minor").is_empty());
        assert!(diatonic_seventh_chords(c(), "Blues").is_empty());
        assert!(diatonic_seventh_chords(c(), "Chromatic").is_empty());
    }

    #[test]
    fn test_unknown_scale_has_no_chords() {
        assert!(diatonic_seventh_chords(c(), "Mystery Mode").is_empty());
    }

    #[test]
    fn test_scale_membership() {
        let major = scale_formula("Major").unwrap();
        assert!(contains_pitch(c(), major, "E".parse().unwrap()));
        assert!(!contains_pitch(c(), major, "F#".parse().unwrap()));
    }

    #[test]
    fn test_scale_lookup_is_case_insensitive() {
        assert!(scale_formula("major").is_some());
        assert!(scale_formula(" harmonic minor ").is_some());
        assert!(scale_formula("nope").is_none());
    }
}
