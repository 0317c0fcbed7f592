//! Frethero - chord diagram trainer for stringed instruments
//!
//! This library provides:
//! - Parsing of compact chord-shape library documents (YAML)
//! - Tag and quality based selection of chord subsets
//! - A playback cursor with manual navigation and a fixed-period change timer
//! - Text renderers for zoomed and full-neck fretboard diagrams
//!
//! # Example
//!
//! ```
//! use frethero::{load_library, select_chords, PlaybackCursor, Selection};
//! use std::time::Duration;
//!
//! let document = r#"
//! chords:
//!   C:
//!     quality: major
//!     shapes:
//!       - [42, 30, 21, 12]
//! "#;
//! let library = load_library(document).unwrap();
//! let names = select_chords(&library, &Selection::ByToken("all".to_string()));
//! let mut cursor = PlaybackCursor::new(names, Duration::from_secs(3));
//! assert_eq!(cursor.current(), "C");
//! ```

pub mod chord;
pub mod error;
pub mod instrument;
pub mod player;
pub mod render;

// Re-export main types for convenience
pub use chord::library::{
    default_tuning, load_library, ChordLibrary, ChordMeta, Include, SetRule,
};
pub use chord::selector::{select_chords, Selection};
pub use chord::shape::{
    decode_shape, decode_token, encode_token, Fret, ShapeToken, TabShape, MUTE_MARKER,
};
pub use error::FretError;
pub use instrument::{Instrument, CAVAQUINHO};
pub use player::cursor::PlaybackCursor;
pub use render::{auto_window, render, ViewMode};
