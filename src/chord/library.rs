use crate::chord::shape::{decode_shape, ShapeToken, TabShape};
use crate::instrument::CAVAQUINHO;
use crate::FretError;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Per-chord attributes used only for selection filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordMeta {
    /// Coarse category label, e.g. "major" or "minor".
    pub quality: Option<String>,
    /// Free-form tags, e.g. "basic" or "seventh".
    pub tags: BTreeSet<String>,
}

/// Explicit inclusion part of a set rule: the `"*"` wildcard or a name list.
///
/// Any other bare string deserializes as `Token` and simply contributes
/// nothing to the selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Include {
    Names(Vec<String>),
    Token(String),
}

/// Named, reusable selection rule over the chord library.
///
/// A chord matches when its quality is in `qualities`, OR any of its tags
/// is in `tags`, OR it is covered by `include`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SetRule {
    #[serde(default)]
    pub include: Option<Include>,
    #[serde(default)]
    pub qualities: BTreeSet<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// A loaded chord library: tuning, decoded shape variants, per-chord
/// metadata and named selection sets. Built once per load and read-only
/// afterwards. Every chord name in `shapes` has a `meta` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordLibrary {
    pub tuning: Vec<String>,
    pub shapes: BTreeMap<String, Vec<TabShape>>,
    pub meta: BTreeMap<String, ChordMeta>,
    pub sets: BTreeMap<String, SetRule>,
}

impl ChordLibrary {
    /// Number of strings implied by the tuning.
    pub fn string_count(&self) -> usize {
        self.tuning.len()
    }

    /// All chord names, in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    /// Default shape for a chord: the first listed variant.
    pub fn default_shape(&self, name: &str) -> Option<&TabShape> {
        self.shapes.get(name).and_then(|variants| variants.first())
    }
}

/// Default tuning when the document does not carry one.
pub fn default_tuning() -> Vec<String> {
    CAVAQUINHO.tuning_vec()
}

/// Raw document model, one-to-one with the YAML schema.
#[derive(Debug, Deserialize)]
struct LibraryDoc {
    tuning: Option<Vec<String>>,
    #[serde(default)]
    chords: BTreeMap<String, ChordEntry>,
    #[serde(default)]
    sets: BTreeMap<String, SetRule>,
}

#[derive(Debug, Deserialize)]
struct ChordEntry {
    quality: Option<String>,
    #[serde(default)]
    tags: BTreeSet<String>,
    shapes: Vec<Vec<ShapeToken>>,
}

/// Parse a library document into a [`ChordLibrary`].
///
/// The input is the document text, already read by the caller; loading is
/// a pure in-memory computation. It is also all-or-nothing: any schema or
/// encoding problem fails the whole call and no partial library escapes.
pub fn load_library(document: &str) -> Result<ChordLibrary, FretError> {
    let doc: LibraryDoc = serde_yaml::from_str(document)
        .map_err(|err| FretError::SchemaError(format!("invalid library document: {err}")))?;

    let tuning = doc.tuning.unwrap_or_else(default_tuning);
    let string_count = tuning.len();

    let mut shapes = BTreeMap::new();
    let mut meta = BTreeMap::new();
    for (name, entry) in doc.chords {
        if entry.shapes.is_empty() {
            return Err(FretError::SchemaError(format!(
                "{name}: 'shapes' must be a non-empty list"
            )));
        }
        let mut variants = Vec::with_capacity(entry.shapes.len());
        for raw_shape in &entry.shapes {
            variants.push(decode_shape(&name, raw_shape, string_count)?);
        }
        meta.insert(
            name.clone(),
            ChordMeta {
                quality: entry.quality,
                tags: entry.tags,
            },
        );
        shapes.insert(name, variants);
    }

    Ok(ChordLibrary {
        tuning,
        shapes,
        meta,
        sets: doc.sets,
    })
}
