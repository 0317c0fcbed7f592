use crate::chord::primitive::split_token;
use crate::FretError;
use serde::Deserialize;
use std::fmt;

/// Mute marker accepted in shape tokens, matched case-insensitively.
pub const MUTE_MARKER: &str = "x";

/// State of a single string within a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fret {
    /// String is not played.
    Muted,
    /// String pressed at the given fret, 0 being the open string.
    Fretted(u32),
}

impl fmt::Display for Fret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fret::Muted => write!(f, "{MUTE_MARKER}"),
            Fret::Fretted(n) => write!(f, "{n}"),
        }
    }
}

/// Raw per-string token as it appears in a library document, either a bare
/// integer like `42` or a textual form like `"212"` or `"x"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ShapeToken {
    Number(i64),
    Text(String),
}

impl fmt::Display for ShapeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeToken::Number(n) => write!(f, "{n}"),
            ShapeToken::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One way to finger a chord: a named, ordered set of per-string frets.
///
/// Index 0 is the lowest-pitched string, the last index the highest.
/// Shapes are built once by the library loader and shared read-only by
/// renderers and playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabShape {
    pub name: String,
    pub frets: Vec<Fret>,
}

impl TabShape {
    /// Check shape-level invariants against the instrument string count.
    ///
    /// Element-level validity is carried by the [`Fret`] type itself, so
    /// only the length can go wrong here. Kept as a separate check so any
    /// construction path that bypasses [`decode_shape`] hits it too.
    pub fn validate(&self, strings_expected: usize) -> Result<(), FretError> {
        if self.frets.len() != strings_expected {
            return Err(FretError::ValidationError(format!(
                "{}: expected {strings_expected} strings, got {}",
                self.name,
                self.frets.len()
            )));
        }
        Ok(())
    }
}

/// Decode one compact token into a [`Fret`].
///
/// Strings are numbered 1 at the highest pitch up to `string_count` at the
/// lowest, and tokens appear in descending string order, so each position
/// carries one `expected_string`. The leading digit of the token must agree
/// with it, which catches transposed or missing strings at load time.
pub fn decode_token(
    chord: &str,
    token: &ShapeToken,
    expected_string: usize,
    string_count: usize,
) -> Result<Fret, FretError> {
    let text = match token {
        ShapeToken::Text(s) if s.eq_ignore_ascii_case(MUTE_MARKER) => return Ok(Fret::Muted),
        ShapeToken::Text(s) => s.clone(),
        ShapeToken::Number(n) => n.to_string(),
    };

    let Ok((_rest, (string_digit, fret_num))) = split_token(&text) else {
        return Err(FretError::EncodingError(format!(
            "{chord}: token '{token}' must be an integer like 42 or '{MUTE_MARKER}'"
        )));
    };

    let string_num = usize::from(string_digit);
    if string_num < 1 || string_num > string_count {
        return Err(FretError::EncodingError(format!(
            "{chord}: string {string_num} out of range 1..{string_count} in token '{token}'"
        )));
    }
    if string_num != expected_string {
        return Err(FretError::EncodingError(format!(
            "{chord}: token '{token}' says string {string_num} but position expects string \
             {expected_string} (order runs {string_count} down to 1)"
        )));
    }

    Ok(Fret::Fretted(fret_num))
}

/// Decode a full shape from its ordered token sequence.
///
/// Tokens run from the lowest-pitched string down to string 1, one per
/// position. The produced shape is validated again before returning.
pub fn decode_shape(
    chord: &str,
    tokens: &[ShapeToken],
    string_count: usize,
) -> Result<TabShape, FretError> {
    if tokens.len() != string_count {
        return Err(FretError::EncodingError(format!(
            "{chord}: expected {string_count} tokens (strings {string_count} down to 1), got {}",
            tokens.len()
        )));
    }

    let mut frets = Vec::with_capacity(string_count);
    for (position, token) in tokens.iter().enumerate() {
        let expected_string = string_count - position;
        frets.push(decode_token(chord, token, expected_string, string_count)?);
    }

    let shape = TabShape {
        name: chord.to_string(),
        frets,
    };
    shape.validate(string_count)?;
    Ok(shape)
}

/// Encode a [`Fret`] back into its compact token text for the given string
/// number. Open strings collapse to the bare string digit.
pub fn encode_token(fret: Fret, string_number: usize) -> String {
    match fret {
        Fret::Muted => MUTE_MARKER.to_string(),
        Fret::Fretted(0) => string_number.to_string(),
        Fret::Fretted(n) => format!("{string_number}{n}"),
    }
}
