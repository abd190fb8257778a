use crate::fretboard::pitch::{pitch_class_at, MAX_FRET};
use crate::fretboard::search;
use crate::theory::layout::{VoicingFamily, VoicingLayout};
use crate::theory::scale::{diatonic_seventh_chords, scale_formula};
use crate::theory::tension::{self, TensionSubstitution};
use crate::types::chord::Chord;
use crate::types::note::Note;
use crate::types::voicing::Voicing;
use anyhow::{anyhow, Result};

/// One complete voicing query: the scale context, the anchored
/// fretboard position that every result must sound, the requested
/// voicing family, and the ergonomic limits.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub key: String,
    pub scale: String,
    /// 1 = high E ... 6 = low E
    pub string: u8,
    pub fret: u8,
    pub family: VoicingFamily,
    pub with_tensions: bool,
    /// Override for the per-family span default (4 closed, 5 drop/tension)
    pub max_fret_span: Option<u8>,
    pub max_fret: u8,
}

impl SearchQuery {
    pub fn new(key: &str, scale: &str, string: u8, fret: u8, family: VoicingFamily) -> Self {
        SearchQuery {
            key: key.to_string(),
            scale: scale.to_string(),
            string,
            fret,
            family,
            with_tensions: false,
            max_fret_span: None,
            max_fret: MAX_FRET,
        }
    }

    pub fn with_tensions(mut self, on: bool) -> Self {
        self.with_tensions = on;
        self
    }

    pub fn with_max_span(mut self, span: u8) -> Self {
        self.max_fret_span = Some(span);
        self
    }
}

/// Find every playable voicing satisfying the query.
///
/// Referentially transparent: identical queries yield identical,
/// identically-ordered result lists. An empty list is a normal
/// outcome (no diatonic chord contains the anchor note, the scale has
/// no stacked-thirds harmony, or nothing fits the geometry); only
/// malformed inputs return an error, before any search work.
pub fn search(query: &SearchQuery) -> Result<Vec<Voicing>> {
    let key = Note::parse_key(&query.key)?;

    if !(1..=6).contains(&query.string) {
        return Err(anyhow!(
            "String number must be 1 (high E) to 6 (low E), got {}",
            query.string
        ));
    }
    if query.fret > query.max_fret {
        return Err(anyhow!(
            "Fret must be 0 to {}, got {}",
            query.max_fret,
            query.fret
        ));
    }

    let anchor_pc = pitch_class_at(query.string, query.fret);

    let chords: Vec<Chord> = diatonic_seventh_chords(key, &query.scale)
        .into_iter()
        .filter(|chord| chord.contains(anchor_pc))
        .collect();

    let governing_scale = scale_formula(&query.scale);

    let mut results = Vec::new();
    for chord in &chords {
        collect_family_hits(query, chord, None, &mut results);

        if query.with_tensions {
            let Some(formula) = governing_scale else {
                continue;
            };
            for recipe in TensionSubstitution::RECIPES {
                if !tension::allowed(chord.quality).contains(&recipe.tension) {
                    continue;
                }
                if !tension::is_diatonic(chord.root, recipe.tension, key, formula) {
                    continue;
                }
                collect_family_hits(query, chord, Some(recipe), &mut results);
            }
        }
    }

    results.sort_by_key(|voicing| voicing.sort_key());
    Ok(results)
}

/// Run the fretboard search for every relevant inversion of the
/// query's family, wrapping hits into voicing records
fn collect_family_hits(
    query: &SearchQuery,
    chord: &Chord,
    substitution: Option<TensionSubstitution>,
    results: &mut Vec<Voicing>,
) {
    // Tension shapes get the wider drop-style span even in closed
    // position
    let span = query.max_fret_span.unwrap_or(if substitution.is_some() {
        5
    } else {
        query.family.default_max_span()
    });

    for inversion in query.family.source_inversions() {
        let layout = VoicingLayout::build(&chord.formula, query.family, inversion, substitution);
        let targets = layout.target_pitches(chord.root);

        let hits = search::find(
            &targets,
            query.family.string_groups(),
            &layout.expected_intervals(),
            query.string,
            query.fret,
            span,
            query.max_fret,
        );

        for hit in hits {
            results.push(Voicing {
                chord: *chord,
                family: query.family,
                inversion: layout.inversion_name(),
                degrees: layout.degrees,
                group: hit.group,
                frets: hit.frets,
                midis: hit.midis,
                substitution,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_string_rejected() {
        let query = SearchQuery::new("C", "Major", 7, 5, VoicingFamily::ClosedRootPosition);
        assert!(search(&query).is_err());

        let query = SearchQuery::new("C", "Major", 0, 5, VoicingFamily::ClosedRootPosition);
        assert!(search(&query).is_err());
    }

    #[test]
    fn test_invalid_fret_rejected() {
        let query = SearchQuery::new("C", "Major", 2, 25, VoicingFamily::ClosedRootPosition);
        assert!(search(&query).is_err());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let query = SearchQuery::new("H", "Major", 2, 5, VoicingFamily::ClosedRootPosition);
        assert!(search(&query).is_err());
    }

    #[test]
    fn test_flat_key_accepted() {
        let query = SearchQuery::new("Bb", "Major", 2, 3, VoicingFamily::ClosedRootPosition);
        assert!(search(&query).is_ok());
    }

    #[test]
    fn test_results_only_contain_anchor() {
        let query = SearchQuery::new("C", "Major", 2, 5, VoicingFamily::Drop2);
        for voicing in search(&query).unwrap() {
            assert!(voicing.contains_position(2, 5));
        }
    }

    #[test]
    fn test_closed_family_is_root_position_only() {
        let query = SearchQuery::new("C", "Major", 2, 5, VoicingFamily::ClosedRootPosition);
        for voicing in search(&query).unwrap() {
            assert_eq!(voicing.inversion, "Root");
            assert_eq!(voicing.degrees[0], 1);
        }
    }

    #[test]
    fn test_span_override_applies() {
        let base = SearchQuery::new("C", "Major", 2, 5, VoicingFamily::Drop2);
        let tight = base.clone().with_max_span(2);
        let loose_count = search(&base).unwrap().len();
        let tight_results = search(&tight).unwrap();
        assert!(tight_results.len() <= loose_count);
        assert!(tight_results.iter().all(|v| v.fret_span() <= 2));
    }

    #[test]
    fn test_drop3_uses_skip_groups() {
        let query = SearchQuery::new("C", "Major", 4, 5, VoicingFamily::Drop3);
        for voicing in search(&query).unwrap() {
            assert!(voicing.group == [6, 4, 3, 2] || voicing.group == [5, 3, 2, 1]);
        }
    }
}
