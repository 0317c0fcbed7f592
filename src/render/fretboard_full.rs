//! Full-neck fretboard diagram, nut to the instrument's last fret.

use crate::chord::shape::TabShape;
use crate::render::render_window;

/// Draw a shape over the whole neck.
///
/// Notes beyond `max_fret` simply fall outside the drawn grid; the codec
/// does not clamp fret numbers and neither does the renderer.
pub fn render_shape_full(shape: &TabShape, tuning: &[String], max_fret: u32) -> String {
    render_window(shape, tuning, 0, max_fret)
}
