use crate::fretboard::pitch::{StringGroup, ADJACENT_GROUPS, DROP3_GROUPS};
use crate::theory::tension::TensionSubstitution;
use crate::types::note::Note;
use std::fmt;

/// The three supported voicing families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VoicingFamily {
    ClosedRootPosition,
    Drop2,
    Drop3,
}

impl VoicingFamily {
    pub const ALL: [VoicingFamily; 3] = [
        VoicingFamily::ClosedRootPosition,
        VoicingFamily::Drop2,
        VoicingFamily::Drop3,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VoicingFamily::ClosedRootPosition => "Root Pos",
            VoicingFamily::Drop2 => "Drop 2",
            VoicingFamily::Drop3 => "Drop 3",
        }
    }

    /// Closed root position is built from the root-position stack only;
    /// the drop families derive a voicing from every closed inversion.
    pub fn source_inversions(&self) -> std::ops::Range<usize> {
        match self {
            VoicingFamily::ClosedRootPosition => 0..1,
            VoicingFamily::Drop2 | VoicingFamily::Drop3 => 0..4,
        }
    }

    /// Candidate 4-string windows for this family
    pub fn string_groups(&self) -> &'static [StringGroup] {
        match self {
            VoicingFamily::ClosedRootPosition | VoicingFamily::Drop2 => &ADJACENT_GROUPS,
            VoicingFamily::Drop3 => &DROP3_GROUPS,
        }
    }

    /// Ergonomic fret-span ceiling: 4 for the tight closed shapes,
    /// 5 for the wider drop shapes
    pub fn default_max_span(&self) -> u8 {
        match self {
            VoicingFamily::ClosedRootPosition => 4,
            VoicingFamily::Drop2 | VoicingFamily::Drop3 => 5,
        }
    }
}

impl fmt::Display for VoicingFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A concrete pitch layout for one (formula, family, inversion)
/// combination: which degree sits in each voice (low to high) and the
/// absolute semitone position of each voice relative to the chord
/// root's original octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoicingLayout {
    /// Degree occupying each voice, low to high. Holds 9/11/13 in a
    /// slot rewritten by a tension substitution.
    pub degrees: [u8; 4],
    /// Absolute semitone values, low to high; dropped voices go
    /// negative relative to the root octave
    pub positions: [i32; 4],
}

impl VoicingLayout {
    /// Compute the layout for a chord formula under a family and
    /// source closed-inversion index (0-3). An optional tension
    /// substitution rewrites one formula slot (and its degree tag)
    /// before the inversion rotation.
    pub fn build(
        formula: &[u8; 4],
        family: VoicingFamily,
        inversion: usize,
        substitution: Option<TensionSubstitution>,
    ) -> Self {
        let mut offsets = [
            formula[0] as i32,
            formula[1] as i32,
            formula[2] as i32,
            formula[3] as i32,
        ];
        let mut degrees = [1u8, 3, 5, 7];

        if let Some(sub) = substitution {
            let slot = sub.formula_slot();
            offsets[slot] = sub.tension.offset() as i32;
            degrees[slot] = sub.tension.degree();
        }

        // Rotate left by the inversion index; wrapped entries move up
        // an octave, producing the closed stack for that inversion
        let mut closed_positions = [0i32; 4];
        let mut closed_degrees = [0u8; 4];
        for voice in 0..4 {
            let slot = (inversion + voice) % 4;
            let octave = if inversion + voice >= 4 { 12 } else { 0 };
            closed_positions[voice] = offsets[slot] + octave;
            closed_degrees[voice] = degrees[slot];
        }

        let (positions, degrees) = match family {
            VoicingFamily::ClosedRootPosition => (closed_positions, closed_degrees),
            VoicingFamily::Drop2 => {
                // 2nd-highest voice (index 2) drops an octave into the bass
                let p = closed_positions;
                let d = closed_degrees;
                ([p[2] - 12, p[0], p[1], p[3]], [d[2], d[0], d[1], d[3]])
            }
            VoicingFamily::Drop3 => {
                // 3rd-highest voice (index 1) drops an octave into the bass
                let p = closed_positions;
                let d = closed_degrees;
                ([p[1] - 12, p[0], p[2], p[3]], [d[1], d[0], d[2], d[3]])
            }
        };

        VoicingLayout { degrees, positions }
    }

    /// The three adjacent-voice semitone gaps this layout demands
    pub fn expected_intervals(&self) -> [i32; 3] {
        [
            self.positions[1] - self.positions[0],
            self.positions[2] - self.positions[1],
            self.positions[3] - self.positions[2],
        ]
    }

    /// Target pitch class of each voice, low to high
    pub fn target_pitches(&self, chord_root: Note) -> [Note; 4] {
        [
            chord_root.transpose(self.positions[0]),
            chord_root.transpose(self.positions[1]),
            chord_root.transpose(self.positions[2]),
            chord_root.transpose(self.positions[3]),
        ]
    }

    /// Degree in the lowest voice; this names the inversion
    pub fn bass_degree(&self) -> u8 {
        self.degrees[0]
    }

    /// Inversion label from the bass degree ("Root", "1st", "2nd",
    /// "3rd", or the tension degree when one sits in the bass)
    pub fn inversion_name(&self) -> String {
        inversion_name_from_bass_degree(self.bass_degree())
    }
}

pub fn inversion_name_from_bass_degree(degree: u8) -> String {
    match degree {
        1 => "Root".to_string(),
        3 => "1st".to_string(),
        5 => "2nd".to_string(),
        7 => "3rd".to_string(),
        9 => "9th".to_string(),
        11 => "11th".to_string(),
        13 => "13th".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::tension::Tension;

    const MAJ7: [u8; 4] = [0, 4, 7, 11];
    const DOM7: [u8; 4] = [0, 4, 7, 10];
    const MIN7: [u8; 4] = [0, 3, 7, 10];

    #[test]
    fn test_closed_root_position_layout() {
        let layout = VoicingLayout::build(&MAJ7, VoicingFamily::ClosedRootPosition, 0, None);
        assert_eq!(layout.degrees, [1, 3, 5, 7]);
        assert_eq!(layout.positions, [0, 4, 7, 11]);
        assert_eq!(layout.expected_intervals(), [4, 3, 4]);
        assert_eq!(layout.inversion_name(), "Root");
    }

    #[test]
    fn test_closed_inversion_rotation() {
        // 2nd inversion dominant 7: [7, 10, 12, 16]
        let layout = VoicingLayout::build(&DOM7, VoicingFamily::ClosedRootPosition, 2, None);
        assert_eq!(layout.positions, [7, 10, 12, 16]);
        assert_eq!(layout.degrees, [5, 7, 1, 3]);
        assert_eq!(layout.inversion_name(), "2nd");
    }

    #[test]
    fn test_drop2_from_root_position() {
        // Closed root [0,4,7,10] -> drop index 2 -> [-5, 0, 4, 10]
        let layout = VoicingLayout::build(&DOM7, VoicingFamily::Drop2, 0, None);
        assert_eq!(layout.positions, [-5, 0, 4, 10]);
        assert_eq!(layout.degrees, [5, 1, 3, 7]);
        assert_eq!(layout.expected_intervals(), [5, 4, 6]);
        // Fifth in the bass: drop 2 of the root stack is a 2nd inversion
        assert_eq!(layout.inversion_name(), "2nd");
    }

    #[test]
    fn test_drop3_from_root_position() {
        // Closed root [0,3,7,10] -> drop index 1 -> [-9, 0, 7, 10]
        let layout = VoicingLayout::build(&MIN7, VoicingFamily::Drop3, 0, None);
        assert_eq!(layout.positions, [-9, 0, 7, 10]);
        assert_eq!(layout.degrees, [3, 1, 5, 7]);
        assert_eq!(layout.expected_intervals(), [9, 7, 3]);
        assert_eq!(layout.inversion_name(), "1st");
    }

    #[test]
    fn test_drop2_degree_orders_across_inversions() {
        let orders: Vec<[u8; 4]> = (0..4)
            .map(|inv| VoicingLayout::build(&MIN7, VoicingFamily::Drop2, inv, None).degrees)
            .collect();
        assert_eq!(
            orders,
            vec![[5, 1, 3, 7], [7, 3, 5, 1], [1, 5, 7, 3], [3, 7, 1, 5]]
        );
    }

    #[test]
    fn test_tension_substitution_rewrites_slot_before_rotation() {
        let sub = TensionSubstitution {
            tension: Tension::Ninth,
            replaces: 1,
        };
        // m7 with 9 for root: offsets become [2,3,7,10]
        let layout = VoicingLayout::build(&MIN7, VoicingFamily::ClosedRootPosition, 0, Some(sub));
        assert_eq!(layout.positions, [2, 3, 7, 10]);
        assert_eq!(layout.degrees, [9, 3, 5, 7]);
        assert_eq!(layout.inversion_name(), "9th");
    }

    #[test]
    fn test_tension_substitution_of_fifth() {
        let sub = TensionSubstitution {
            tension: Tension::Thirteenth,
            replaces: 5,
        };
        // Dom7 with 13 for fifth, 1st-inversion drop 2
        let layout = VoicingLayout::build(&DOM7, VoicingFamily::Drop2, 1, Some(sub));
        // Closed 1st inv of [0,4,9,10]: [4,9,10,12] -> drop2: [-2,4,9,12]
        assert_eq!(layout.positions, [-2, 4, 9, 12]);
        assert_eq!(layout.degrees, [7, 3, 13, 1]);
        assert_eq!(layout.inversion_name(), "3rd");
    }

    #[test]
    fn test_target_pitches() {
        let g: Note = "G".parse().unwrap();
        let layout = VoicingLayout::build(&DOM7, VoicingFamily::Drop2, 0, None);
        let names: Vec<&str> = layout.target_pitches(g).iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["D", "G", "B", "F"]);
    }
}
