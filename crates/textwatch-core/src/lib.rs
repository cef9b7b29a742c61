#![cfg_attr(not(test), no_std)]

//! Hardware-independent core of the text watch face.
//!
//! Turns a wall-clock time into a spoken phrase, packs the phrase into a
//! handful of short display lines, and tracks which lines need a slide
//! transition when the time changes.

pub mod app;
pub mod clock;
pub mod input;
pub mod layout;
pub mod phrase;
pub mod render;
pub mod settings;
mod text_buffer;

pub use clock::{TimeError, WallTime};
pub use layout::{LayoutConfig, Line, LineBuffer, pack_lines, time_to_lines};
pub use phrase::{Language, Phrase, PhraseTable, Word, generate_phrase};

/// Number of display lines on the watch face.
pub const NUM_LINES: usize = 4;
/// Width budget of one line, in characters.
pub const LINE_LENGTH: usize = 7;
/// Byte capacity of one line slot. Long words are kept whole up to this size.
pub const LINE_BYTES: usize = 24;
/// Byte capacity of a generated phrase.
pub const PHRASE_BYTES: usize = NUM_LINES * (LINE_LENGTH + 2) + 1;
