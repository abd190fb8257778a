//! # Fretfinder Core
//!
//! Guitar fretboard chord-voicing search engine. Given a diatonic
//! scale context, an anchored fretboard position, and a voicing family
//! (closed root position, drop 2, drop 3, optionally with tension
//! substitutions), enumerates every physically playable 4-note
//! fingering that sounds the anchor.
//!
//! Standard 6-string tuning (E A D G B E) only. Fully synchronous and
//! allocation-light; every query is a pure function of its inputs.
//!
//! ## Features
//!
//! - **serde**: JSON serialization of voicing maps for web interop
//!
//! ## Example
//!
//! ```
//! use fretfinder_core::engine::{search, SearchQuery};
//! use fretfinder_core::theory::VoicingFamily;
//!
//! let query = SearchQuery::new("C", "Major", 2, 5, VoicingFamily::ClosedRootPosition);
//! let voicings = search(&query)?;
//! assert!(voicings.iter().any(|v| v.chord.symbol() == "Fmaj7"));
//! # anyhow::Ok(())
//! ```

pub mod engine;
pub mod fretboard;
pub mod theory;
pub mod types;

// Re-export commonly used types
pub use engine::{search, SearchQuery};
pub use theory::{Tension, TensionSubstitution, VoicingFamily};
pub use types::{Chord, ChordQuality, Note, Voicing, VoicingMap};
