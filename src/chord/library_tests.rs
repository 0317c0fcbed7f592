#[cfg(test)]
use crate::chord::library::{load_library, ChordLibrary};

/// Small but complete document exercising qualities, tags, shape variants,
/// a muted string and named sets. Shared by tests across the crate.
#[cfg(test)]
pub fn demo_document() -> &'static str {
    r#"
tuning: ["D", "G", "B", "D"]
chords:
  C:
    quality: major
    tags: [basic]
    shapes:
      - [42, 30, 21, 12]
      - [45, 34, 212, 112]
  Dm:
    quality: minor
    tags: [basic]
    shapes:
      - [40, 32, 23, 13]
  G:
    quality: major
    tags: [basic]
    shapes:
      - [40, 30, 20, 10]
  G7:
    quality: major
    tags: [basic, seventh]
    shapes:
      - [40, 30, 20, 13]
  Am:
    quality: minor
    tags: [movable]
    shapes:
      - [47, 35, 25, 17]
      - ["x", 35, 25, 17]
sets:
  beginner:
    include: ["C", "G"]
    tags: ["basic"]
  sevenths:
    tags: ["seventh"]
  everything:
    include: "*"
"#
}

#[cfg(test)]
pub fn demo_library() -> ChordLibrary {
    load_library(demo_document()).expect("demo document must load")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::library::{default_tuning, Include};
    use crate::chord::shape::Fret;
    use crate::FretError;

    fn fretted(frets: &[u32]) -> Vec<Fret> {
        frets.iter().map(|f| Fret::Fretted(*f)).collect()
    }

    #[test]
    fn load_demo_document_end_to_end() {
        let library = demo_library();
        assert_eq!(library.tuning, vec!["D", "G", "B", "D"]);
        assert_eq!(library.string_count(), 4);
        assert_eq!(library.shapes.len(), 5);
        assert_eq!(library.meta.len(), 5);

        // first variant is the default shape
        let c = library.default_shape("C").unwrap();
        assert_eq!(c.frets, fretted(&[2, 0, 1, 2]));

        // second variant with multi-digit frets
        let c_high = &library.shapes["C"][1];
        assert_eq!(c_high.frets, fretted(&[5, 4, 12, 12]));

        // muted string variant
        let am_muted = &library.shapes["Am"][1];
        assert_eq!(am_muted.frets[0], Fret::Muted);

        // metadata
        let g7 = &library.meta["G7"];
        assert_eq!(g7.quality.as_deref(), Some("major"));
        assert!(g7.tags.contains("seventh"));

        // sets
        let beginner = &library.sets["beginner"];
        assert_eq!(
            beginner.include,
            Some(Include::Names(vec!["C".to_string(), "G".to_string()]))
        );
        assert!(beginner.tags.contains("basic"));
        let everything = &library.sets["everything"];
        assert_eq!(everything.include, Some(Include::Token("*".to_string())));
    }

    #[test]
    fn default_tuning_when_absent() {
        let library = load_library(
            r"
chords:
  C:
    shapes:
      - [42, 30, 21, 12]
",
        )
        .unwrap();
        assert_eq!(library.tuning, default_tuning());
        // a chord without quality or tags still gets an empty meta entry
        let meta = &library.meta["C"];
        assert_eq!(meta.quality, None);
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn load_is_idempotent() {
        let first = load_library(demo_document()).unwrap();
        let second = load_library(demo_document()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_chords_is_an_empty_library() {
        let library = load_library("tuning: [\"D\", \"G\", \"B\", \"D\"]").unwrap();
        assert!(library.shapes.is_empty());
        assert!(library.sets.is_empty());
    }

    #[test]
    fn chords_must_be_a_mapping() {
        let err = load_library("chords: 3").unwrap_err();
        assert!(matches!(err, FretError::SchemaError(_)), "{err}");
    }

    #[test]
    fn chord_entry_must_be_a_record() {
        let err = load_library(
            r"
chords:
  C:
    - [42, 30, 21, 12]
",
        )
        .unwrap_err();
        assert!(matches!(err, FretError::SchemaError(_)), "{err}");
    }

    #[test]
    fn shapes_are_required() {
        let err = load_library(
            r"
chords:
  C:
    quality: major
",
        )
        .unwrap_err();
        assert!(matches!(err, FretError::SchemaError(_)), "{err}");
    }

    #[test]
    fn shapes_must_be_a_list() {
        let err = load_library(
            r"
chords:
  C:
    shapes: 42
",
        )
        .unwrap_err();
        assert!(matches!(err, FretError::SchemaError(_)), "{err}");
    }

    #[test]
    fn shapes_must_be_non_empty() {
        let err = load_library(
            r"
chords:
  C:
    shapes: []
",
        )
        .unwrap_err();
        let FretError::SchemaError(msg) = err else {
            panic!("expected schema error");
        };
        assert!(msg.contains('C'), "{msg}");
    }

    #[test]
    fn sets_must_be_a_mapping() {
        let err = load_library(
            r"
chords:
  C:
    shapes:
      - [42, 30, 21, 12]
sets: 5
",
        )
        .unwrap_err();
        assert!(matches!(err, FretError::SchemaError(_)), "{err}");
    }

    #[test]
    fn encoding_error_names_the_chord() {
        let err = load_library(
            r"
chords:
  Dm:
    shapes:
      - [40, 32, 32, 13]
",
        )
        .unwrap_err();
        let FretError::EncodingError(msg) = err else {
            panic!("expected encoding error");
        };
        assert!(msg.contains("Dm"), "{msg}");
    }

    #[test]
    fn bad_shape_aborts_the_whole_load() {
        // one bad chord poisons the load even though the other is fine
        let result = load_library(
            r"
chords:
  C:
    shapes:
      - [42, 30, 21, 12]
  Zz:
    shapes:
      - [42, 30, 21, 99]
",
        );
        assert!(result.is_err());
    }
}
