use crate::fretboard::pitch::{frets_producing, midi_at, StringGroup};
use crate::types::note::Note;

/// A fret assignment satisfying every search constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub group: StringGroup,
    /// Frets aligned with the group, low to high voice
    pub frets: [u8; 4],
    /// Realized MIDI pitches, strictly ascending
    pub midis: [u8; 4],
}

impl SearchHit {
    pub fn fret_span(&self) -> u8 {
        let min = *self.frets.iter().min().unwrap_or(&0);
        let max = *self.frets.iter().max().unwrap_or(&0);
        max - min
    }
}

/// Enumerate every playable fret assignment for four target pitch
/// classes over the candidate string groups.
///
/// Only groups containing the anchor string are considered. Within a
/// group, the Cartesian product of per-voice fret candidates is walked
/// (at most three candidates per voice within 24 frets) and a
/// combination survives only if:
/// - the voice on the anchor string sits exactly at the anchor fret,
/// - the fret span stays within `max_fret_span`,
/// - the realized MIDI pitches strictly ascend low to high,
/// - the three adjacent gaps equal `expected_intervals` exactly (this
///   is what separates a true closed/drop shape from an arbitrary
///   same-pitch-class fingering).
///
/// An empty result is a normal outcome.
pub fn find(
    targets: &[Note; 4],
    groups: &[StringGroup],
    expected_intervals: &[i32; 3],
    anchor_string: u8,
    anchor_fret: u8,
    max_fret_span: u8,
    max_fret: u8,
) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    for group in groups {
        let Some(anchor_voice) = group.iter().position(|&s| s == anchor_string) else {
            continue;
        };

        let candidates: Vec<Vec<u8>> = group
            .iter()
            .zip(targets.iter())
            .map(|(&string, &target)| frets_producing(string, target, max_fret))
            .collect();

        for &f0 in &candidates[0] {
            for &f1 in &candidates[1] {
                for &f2 in &candidates[2] {
                    for &f3 in &candidates[3] {
                        let frets = [f0, f1, f2, f3];

                        if frets[anchor_voice] != anchor_fret {
                            continue;
                        }

                        let min = *frets.iter().min().unwrap();
                        let max = *frets.iter().max().unwrap();
                        if max - min > max_fret_span {
                            continue;
                        }

                        let midis = [
                            midi_at(group[0], f0),
                            midi_at(group[1], f1),
                            midi_at(group[2], f2),
                            midi_at(group[3], f3),
                        ];
                        if !(midis[0] < midis[1] && midis[1] < midis[2] && midis[2] < midis[3]) {
                            continue;
                        }

                        let actual = [
                            midis[1] as i32 - midis[0] as i32,
                            midis[2] as i32 - midis[1] as i32,
                            midis[3] as i32 - midis[2] as i32,
                        ];
                        if actual != *expected_intervals {
                            continue;
                        }

                        hits.push(SearchHit {
                            group: *group,
                            frets,
                            midis,
                        });
                    }
                }
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::pitch::ADJACENT_GROUPS;

    fn notes(names: [&str; 4]) -> [Note; 4] {
        names.map(|n| n.parse().unwrap())
    }

    #[test]
    fn test_finds_known_closed_voicing() {
        // Fmaj7 root position anchored on the B string, 5th fret
        let targets = notes(["F", "A", "C", "E"]);
        let hits = find(&targets, &ADJACENT_GROUPS, &[4, 3, 4], 2, 5, 4, 24);

        assert!(hits
            .iter()
            .any(|h| h.group == [5, 4, 3, 2] && h.frets == [8, 7, 5, 5]));
    }

    #[test]
    fn test_anchor_must_match_exactly() {
        let targets = notes(["F", "A", "C", "E"]);
        // Same query anchored one fret away finds nothing on that string
        let hits = find(&targets, &ADJACENT_GROUPS, &[4, 3, 4], 2, 6, 4, 24);
        assert!(hits.iter().all(|h| {
            let voice = h.group.iter().position(|&s| s == 2).unwrap();
            h.frets[voice] == 6
        }));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_groups_without_anchor_string_are_skipped() {
        let targets = notes(["F", "A", "C", "E"]);
        // Anchor on the low E string: only the bottom group qualifies
        let hits = find(&targets, &ADJACENT_GROUPS, &[4, 3, 4], 6, 1, 4, 24);
        assert!(hits.iter().all(|h| h.group.contains(&6)));
    }

    #[test]
    fn test_span_limit_filters() {
        let targets = notes(["F", "A", "C", "E"]);
        let wide = find(&targets, &ADJACENT_GROUPS, &[4, 3, 4], 2, 5, 4, 24);
        let narrow = find(&targets, &ADJACENT_GROUPS, &[4, 3, 4], 2, 5, 1, 24);
        assert!(narrow.len() <= wide.len());
        assert!(narrow.iter().all(|h| h.fret_span() <= 1));
    }

    #[test]
    fn test_interval_mismatch_rejected() {
        // Correct pitch classes but impossible interval demand
        let targets = notes(["F", "A", "C", "E"]);
        let hits = find(&targets, &ADJACENT_GROUPS, &[1, 1, 1], 2, 5, 4, 24);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_hits_always_ascend() {
        let targets = notes(["D", "G", "B", "F"]);
        let hits = find(&targets, &ADJACENT_GROUPS, &[5, 4, 6], 5, 10, 5, 24);
        assert!(!hits.is_empty());
        for hit in hits {
            assert!(hit.midis[0] < hit.midis[1]);
            assert!(hit.midis[1] < hit.midis[2]);
            assert!(hit.midis[2] < hit.midis[3]);
        }
    }
}
