// fretfinder-core/src/theory/mod.rs

pub mod layout;
pub mod scale;
pub mod tension;

pub use layout::{VoicingFamily, VoicingLayout};
pub use scale::{diatonic_seventh_chords, scale_formula, scale_names, SCALE_FORMULAS};
pub use tension::{Tension, TensionSubstitution};
