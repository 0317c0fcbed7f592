//! Zoomed fretboard diagram: a tight window around the fretted notes.

use crate::chord::shape::TabShape;
use crate::render::{auto_window, render_window};

/// Draw a shape inside its auto-selected fret window.
pub fn render_shape(shape: &TabShape, tuning: &[String]) -> String {
    let (y0, y1) = auto_window(&shape.frets);
    render_window(shape, tuning, y0, y1)
}
