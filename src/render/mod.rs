//! Text renderers for chord diagrams.
//!
//! Diagrams are plain monospace strings: strings run left to right from
//! the lowest pitch to the highest, frets run top to bottom with the nut
//! at the top. The core produces the text and never looks at it again;
//! what terminal it lands on is the caller's business.

pub mod fretboard;
pub mod fretboard_full;

use crate::chord::shape::{Fret, TabShape};
use crate::instrument::CAVAQUINHO;
use std::fmt;

/// Which diagram to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Tight window around the fretted notes.
    #[default]
    Zoom,
    /// The whole neck, nut to `max_fret`.
    Full,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Zoom => write!(f, "zoom"),
            ViewMode::Full => write!(f, "full"),
        }
    }
}

/// Draw a chord shape in the requested mode.
pub fn render(shape: &TabShape, tuning: &[String], mode: ViewMode) -> String {
    match mode {
        ViewMode::Zoom => fretboard::render_shape(shape, tuning),
        ViewMode::Full => fretboard_full::render_shape_full(shape, tuning, CAVAQUINHO.max_fret),
    }
}

/// Pick a tight `[start, end]` fret window for the zoomed view.
///
/// Open strings are ignored when any fretted note exists, so low chords
/// keep the nut in view while high positions zoom to their neighborhood.
pub fn auto_window(frets: &[Fret]) -> (u32, u32) {
    const PAD: u32 = 1;
    const MIN_SPAN: u32 = 4;

    let nums: Vec<u32> = frets
        .iter()
        .filter_map(|f| match f {
            Fret::Fretted(n) => Some(*n),
            Fret::Muted => None,
        })
        .collect();
    if nums.is_empty() {
        return (0, MIN_SPAN);
    }
    let lowest_fretted = nums.iter().copied().filter(|n| *n > 0).min().unwrap_or(0);
    let highest = nums.iter().copied().max().unwrap_or(0);
    if highest <= 3 {
        return (0, MIN_SPAN.max(3));
    }
    let start = lowest_fretted.saturating_sub(PAD).max(1);
    let end = (start + MIN_SPAN).max(highest + PAD);
    (start, end)
}

/// Left margin carrying the fret numbers.
const MARGIN: usize = 3;

/// Render the window `[y0, y1]` of the neck with the shape's notes.
///
/// Layout, top to bottom: chord name, tuning letters, mute markers (only
/// when the shape has any), then alternating fret lines and string
/// segments. A note at fret `f` sits in the gap above the line for `f`,
/// mirroring how a finger sits behind the fret.
pub(crate) fn render_window(shape: &TabShape, tuning: &[String], y0: u32, y1: u32) -> String {
    let strings = tuning.len();
    let mut out = String::new();

    out.push_str(&shape.name);
    out.push('\n');

    // tuning letters above the nut
    out.push_str(&" ".repeat(MARGIN));
    for (s, note) in tuning.iter().enumerate() {
        out.push_str(note);
        if s + 1 < strings {
            out.push_str(&" ".repeat(3_usize.saturating_sub(note.len())));
        }
    }
    out.push('\n');

    // mute markers above the nut
    if shape.frets.iter().any(|f| matches!(f, Fret::Muted)) {
        let mut row = " ".repeat(MARGIN);
        for (s, f) in shape.frets.iter().enumerate() {
            row.push(if matches!(f, Fret::Muted) { 'x' } else { ' ' });
            if s + 1 < strings {
                row.push_str("  ");
            }
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }

    // notes at the window's first fret sit above its top line
    if y0 >= 1 {
        out.push_str(&gap_row(shape, y0, strings));
        out.push('\n');
    }
    for f in y0..=y1 {
        out.push_str(&fret_row(f, strings));
        out.push('\n');
        if f < y1 {
            out.push_str(&gap_row(shape, f + 1, strings));
            out.push('\n');
        }
    }
    out
}

/// One horizontal fret line, labeled; the nut is drawn heavier.
fn fret_row(fret: u32, strings: usize) -> String {
    let fill = if fret == 0 { "==" } else { "--" };
    let mut row = format!("{fret:>2} ");
    for s in 0..strings {
        row.push('+');
        if s + 1 < strings {
            row.push_str(fill);
        }
    }
    row
}

/// One row of string segments with the notes landing at `fret`.
fn gap_row(shape: &TabShape, fret: u32, strings: usize) -> String {
    let mut row = " ".repeat(MARGIN);
    for (s, f) in shape.frets.iter().enumerate() {
        let mark = if matches!(f, Fret::Fretted(n) if *n == fret) {
            'o'
        } else {
            '|'
        };
        row.push(mark);
        if s + 1 < strings {
            row.push_str("  ");
        }
    }
    row
}
