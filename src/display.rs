//! Result-row formatting for the terminal and JSON output for app
//! consumers

use colored::*;
use fretfinder_core::types::Voicing;

/// Plain row text, e.g.
/// `3. G7 - 2nd Inv Drop 2 - 5 1 3 b7 - R6 - [ 10 10 9 10 ]`
pub fn format_row(index: usize, voicing: &Voicing) -> String {
    format!("{}. {}", index + 1, voicing)
}

/// Colored row for the REPL
pub fn format_row_colored(index: usize, voicing: &Voicing) -> String {
    let degrees = voicing.degree_labels().join(" ");
    let frets: Vec<String> = voicing.frets.iter().map(|f| f.to_string()).collect();
    let mut line = format!(
        "{} {} - {} - {} - {} - [ {} ]",
        format!("{}.", index + 1).dimmed(),
        voicing.chord.symbol().bright_cyan().bold(),
        format!("{} Inv {}", voicing.inversion, voicing.family.label()).green(),
        degrees.yellow(),
        format!("R{}", voicing.bass_string()).dimmed(),
        frets.join(" ")
    );
    if let Some(sub) = &voicing.substitution {
        line.push_str(&format!(" {}", format!("({})", sub.label()).magenta()));
    }
    if voicing.has_flat_nine_clash() {
        line.push_str(&format!(" {}", "b9!".bright_red()));
    }
    line
}

/// Structured rows for app consumers, mirroring the UI's voicing-map
/// boundary shape
pub fn to_json_rows(voicings: &[Voicing]) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = voicings
        .iter()
        .enumerate()
        .map(|(i, v)| {
            serde_json::json!({
                "id": i + 1,
                "chord": v.chord.symbol(),
                "quality": v.display_quality(),
                "inversion": v.inversion,
                "family": v.family.label(),
                "degrees": v.degree_labels(),
                "stringGroup": v.group_label().label(),
                "stringSetLowToHigh": v.group,
                "fretsLowToHigh": v.frets,
                "fretSpan": v.fret_span(),
                "b9Warning": v.has_flat_nine_clash(),
                "tension": v.substitution.map(|s| s.label()),
                "voicingMap": v.voicing_map(),
            })
        })
        .collect();
    serde_json::Value::Array(rows)
}
