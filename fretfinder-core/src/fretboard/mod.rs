// fretfinder-core/src/fretboard/mod.rs

pub mod pitch;
pub mod search;

pub use pitch::{
    frets_producing, midi_at, pitch_class_at, string_name, StringGroup, StringGroupLabel,
    ADJACENT_GROUPS, DROP3_GROUPS, MAX_FRET, OPEN_STRING_MIDI,
};
pub use search::{find, SearchHit};
