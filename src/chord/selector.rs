use crate::chord::library::{ChordLibrary, Include};
use std::collections::BTreeSet;

/// A request for a subset of the chord library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Explicit chord names, kept in the caller's order.
    ByNames(Vec<String>),
    /// A set name, `"all"`, or a quality shortcut like `"major"`.
    ByToken(String),
}

/// Resolve a selection request into an ordered, de-duplicated list of
/// chord names.
///
/// Names absent from the library never appear in the output. The explicit
/// name path preserves the caller's order; every other path is sorted
/// ascending. An unresolved token yields an empty list rather than an
/// error so interactive callers can show "no matches".
pub fn select_chords(library: &ChordLibrary, selection: &Selection) -> Vec<String> {
    match selection {
        Selection::ByNames(names) => {
            let mut seen = BTreeSet::new();
            names
                .iter()
                .filter(|name| library.contains(name.as_str()))
                .filter(|name| seen.insert(name.as_str()))
                .cloned()
                .collect()
        }
        Selection::ByToken(token) => select_by_token(library, token),
    }
}

fn select_by_token(library: &ChordLibrary, token: &str) -> Vec<String> {
    // a named set wins over the convenience shortcuts
    if let Some(rule) = library.sets.get(token) {
        let mut picked: BTreeSet<&str> = BTreeSet::new();

        let wildcard = matches!(&rule.include, Some(Include::Token(t)) if t == "*");
        if wildcard || token == "all" {
            picked.extend(library.names());
        } else if let Some(Include::Names(names)) = &rule.include {
            picked.extend(
                names
                    .iter()
                    .map(String::as_str)
                    .filter(|&name| library.contains(name)),
            );
        }

        if !rule.qualities.is_empty() {
            for (name, meta) in &library.meta {
                if meta
                    .quality
                    .as_ref()
                    .is_some_and(|quality| rule.qualities.contains(quality))
                {
                    picked.insert(name.as_str());
                }
            }
        }
        if !rule.tags.is_empty() {
            for (name, meta) in &library.meta {
                if !meta.tags.is_disjoint(&rule.tags) {
                    picked.insert(name.as_str());
                }
            }
        }

        return picked.into_iter().map(ToString::to_string).collect();
    }

    match token {
        "all" => library.names().map(ToString::to_string).collect(),
        "major" | "minor" => library
            .meta
            .iter()
            .filter(|(_, meta)| meta.quality.as_deref() == Some(token))
            .map(|(name, _)| name.clone())
            .collect(),
        _ => Vec::new(),
    }
}
