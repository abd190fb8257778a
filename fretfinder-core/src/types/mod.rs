// fretfinder-core/src/types/mod.rs

pub mod chord;
pub mod note;
pub mod quality;
pub mod voicing;

pub use chord::Chord;
pub use note::Note;
pub use quality::ChordQuality;
pub use voicing::{VoicedNote, Voicing, VoicingMap};
