//! # Fretfinder
//!
//! Interactive CLI for the `fretfinder-core` chord-voicing search engine.
//! Given a key, a scale and a fretted anchor note, it lists every playable
//! four-note voicing (closed, drop 2 and drop 3) of the scale's diatonic
//! 7th chords that sounds the anchor, optionally with diatonic tension
//! substitutions.
//!
//! ## Modules
//!
//! - `commands`: Prefix-matched REPL commands and the query context they
//!   mutate (key, scale, voicing family, tensions, span, output format).
//! - `display`: Table and JSON rendering for search results.
//! - `repl`: The rustyline-based interactive loop.

pub mod commands;
pub mod display;
pub mod repl;

// Re-export commonly used items for convenience
pub use crate::commands::{create_registry, CommandContext, CommandResult};
pub use fretfinder_core::engine::{search, SearchQuery};
