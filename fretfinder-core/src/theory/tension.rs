use crate::theory::scale;
use crate::types::note::Note;
use crate::types::quality::ChordQuality;
use std::fmt;

/// A tension degree beyond the basic 7th-chord tones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tension {
    Ninth,
    Eleventh,
    Thirteenth,
}

impl Tension {
    /// Semitone offset from the chord root
    pub fn offset(&self) -> u8 {
        match self {
            Tension::Ninth => 2,
            Tension::Eleventh => 5,
            Tension::Thirteenth => 9,
        }
    }

    /// Numeric degree (9, 11 or 13)
    pub fn degree(&self) -> u8 {
        match self {
            Tension::Ninth => 9,
            Tension::Eleventh => 11,
            Tension::Thirteenth => 13,
        }
    }
}

impl fmt::Display for Tension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degree())
    }
}

/// One of the six fixed substitution recipes: a tension replacing
/// either the root or the fifth. A substituted voicing always stays
/// four notes; the replaced tone is simply not sounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TensionSubstitution {
    pub tension: Tension,
    /// Chord degree removed to make room: 1 (root) or 5 (fifth)
    pub replaces: u8,
}

impl TensionSubstitution {
    pub const RECIPES: [TensionSubstitution; 6] = [
        TensionSubstitution { tension: Tension::Ninth, replaces: 1 },
        TensionSubstitution { tension: Tension::Ninth, replaces: 5 },
        TensionSubstitution { tension: Tension::Eleventh, replaces: 1 },
        TensionSubstitution { tension: Tension::Eleventh, replaces: 5 },
        TensionSubstitution { tension: Tension::Thirteenth, replaces: 1 },
        TensionSubstitution { tension: Tension::Thirteenth, replaces: 5 },
    ];

    /// Index into the chord formula that this recipe rewrites
    /// (the root slot or the fifth slot)
    pub fn formula_slot(&self) -> usize {
        if self.replaces == 1 {
            0
        } else {
            2
        }
    }

    /// Badge label, e.g. "9 for R", "13 for 5"
    pub fn label(&self) -> String {
        if self.replaces == 1 {
            format!("{} for R", self.tension)
        } else {
            format!("{} for 5", self.tension)
        }
    }
}

impl fmt::Display for TensionSubstitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which tensions are harmonically admissible on a chord quality.
/// The 11 is avoided over major-third qualities, the 13 over altered
/// fifths; the diatonic check gates everything further per scale.
pub fn allowed(quality: ChordQuality) -> &'static [Tension] {
    use Tension::*;
    match quality {
        ChordQuality::Maj7 => &[Ninth, Thirteenth],
        ChordQuality::Min7 => &[Ninth, Eleventh, Thirteenth],
        ChordQuality::Dom7 => &[Ninth, Thirteenth],
        ChordQuality::Min7b5 => &[Ninth, Eleventh],
        ChordQuality::Dim7 => &[Ninth, Eleventh],
        ChordQuality::MinMaj7 => &[Ninth, Eleventh, Thirteenth],
        ChordQuality::AugMaj7 => &[Ninth],
        ChordQuality::Aug7 => &[Ninth],
        ChordQuality::Maj7b5 => &[Ninth],
        ChordQuality::Dom7b5 => &[Ninth],
        ChordQuality::Dom7sus4 => &[Ninth, Thirteenth],
        ChordQuality::Min7Sharp5 => &[Ninth, Eleventh],
        ChordQuality::Six => &[Ninth],
        ChordQuality::SixFlat5 => &[Ninth],
        ChordQuality::Min6 => &[Ninth, Eleventh],
        ChordQuality::Other(..) => &[],
    }
}

/// A tension substitution is only usable when the tension's absolute
/// pitch class is a member of the governing scale; chromatic tensions
/// are out of scope.
pub fn is_diatonic(chord_root: Note, tension: Tension, scale_root: Note, formula: &[u8]) -> bool {
    let pitch = chord_root.transpose(tension.offset() as i32);
    scale::contains_pitch(scale_root, formula, pitch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_and_degrees() {
        assert_eq!(Tension::Ninth.offset(), 2);
        assert_eq!(Tension::Eleventh.offset(), 5);
        assert_eq!(Tension::Thirteenth.offset(), 9);
        assert_eq!(Tension::Thirteenth.degree(), 13);
    }

    #[test]
    fn test_six_recipes() {
        assert_eq!(TensionSubstitution::RECIPES.len(), 6);
        let root_recipes = TensionSubstitution::RECIPES
            .iter()
            .filter(|r| r.replaces == 1)
            .count();
        assert_eq!(root_recipes, 3);
    }

    #[test]
    fn test_recipe_slots_and_labels() {
        let nine_for_root = TensionSubstitution {
            tension: Tension::Ninth,
            replaces: 1,
        };
        assert_eq!(nine_for_root.formula_slot(), 0);
        assert_eq!(nine_for_root.label(), "9 for R");

        let thirteen_for_fifth = TensionSubstitution {
            tension: Tension::Thirteenth,
            replaces: 5,
        };
        assert_eq!(thirteen_for_fifth.formula_slot(), 2);
        assert_eq!(thirteen_for_fifth.label(), "13 for 5");
    }

    #[test]
    fn test_admissibility_table() {
        assert_eq!(
            allowed(ChordQuality::Min7),
            &[Tension::Ninth, Tension::Eleventh, Tension::Thirteenth]
        );
        assert_eq!(
            allowed(ChordQuality::Min7b5),
            &[Tension::Ninth, Tension::Eleventh]
        );
        assert_eq!(
            allowed(ChordQuality::Dom7sus4),
            &[Tension::Ninth, Tension::Thirteenth]
        );
        assert!(allowed(ChordQuality::Other(2, 7, 10)).is_empty());
    }

    #[test]
    fn test_diatonic_check() {
        let c: Note = "C".parse().unwrap();
        let b: Note = "B".parse().unwrap();
        let major = crate::theory::scale::scale_formula("Major").unwrap();

        // 9th of Bm7b5 in C major would be C#: chromatic, rejected
        assert!(!is_diatonic(b, Tension::Ninth, c, major));
        // 11th of Bm7b5 is E: diatonic
        assert!(is_diatonic(b, Tension::Eleventh, c, major));
        // 9th of Dm7 is E: diatonic
        let d: Note = "D".parse().unwrap();
        assert!(is_diatonic(d, Tension::Ninth, c, major));
    }
}
