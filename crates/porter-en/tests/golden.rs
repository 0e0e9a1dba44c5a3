//! Golden tests: compare stems against a recorded reference vocabulary.
//!
//! The vocabulary lives in tests/golden/words.json as a list of
//! `{"word": ..., "stem": ...}` records (lowercase stems, no case
//! restoration).
//!
//! Run: cargo test -p porter-en --test golden

use std::path::PathBuf;

use porter_en::{PorterStemmer, Resolution};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Helper: load the vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GoldenEntry {
    word: String,
    stem: String,
}

fn load_golden() -> Vec<GoldenEntry> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/words.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_vocabulary() {
    let stemmer = PorterStemmer::new();
    let entries = load_golden();
    assert!(entries.len() > 500, "golden vocabulary looks truncated");

    let mismatches: Vec<String> = entries
        .iter()
        .filter_map(|e| {
            let got = stemmer.stem_lower(&e.word);
            (got != e.stem).then(|| format!("{}: expected {:?}, got {:?}", e.word, e.stem, got))
        })
        .collect();

    assert!(
        mismatches.is_empty(),
        "{} of {} words differ:\n{}",
        mismatches.len(),
        entries.len(),
        mismatches.join("\n")
    );
}

#[test]
fn golden_vocabulary_uppercase_keeps_casing() {
    let stemmer = PorterStemmer::new();
    for e in load_golden() {
        let upper = e.word.to_ascii_uppercase();
        assert_eq!(stemmer.stem_lower(&upper), e.stem, "{upper}");
        // Rewritten tails ("happy" -> "happi") keep the stem's lowercase letters.
        if e.word.starts_with(&e.stem) {
            assert_eq!(stemmer.stem(&upper), e.stem.to_ascii_uppercase(), "{upper}");
        }
    }
}

#[test]
fn trace_ends_at_golden_stem() {
    let stemmer = PorterStemmer::new();
    for e in load_golden() {
        let trace = stemmer.trace(&e.word);
        assert_eq!(trace.stem, e.stem, "{}", e.word);
        if trace.resolution == Resolution::Pipeline {
            let last = trace.steps.last().map(|(_, region)| region.as_str());
            assert_eq!(last, Some(e.stem.as_str()), "{}", e.word);
        }
    }
}

#[test]
fn idempotent_on_curated_stems() {
    let stemmer = PorterStemmer::new();
    let words = [
        "cats",
        "running",
        "meetings",
        "hopping",
        "hoping",
        "relational",
        "caresses",
        "ponies",
        "generalizations",
        "abandoned",
        "adoption",
        "controlling",
        "happy",
        "skies",
        "dying",
        "dependent",
        "formative",
    ];
    for word in words {
        let once = stemmer.stem_lower(word);
        let twice = stemmer.stem_lower(&once);
        assert_eq!(once, twice, "{word}");
    }
}

#[test]
fn idempotence_is_not_universal() {
    let stemmer = PorterStemmer::new();
    let once = stemmer.stem_lower("agreed");
    assert_eq!(once, "agre");
    assert_eq!(stemmer.stem_lower(&once), "agr");
}

#[test]
fn deterministic_across_instances() {
    let a = PorterStemmer::new();
    let b = PorterStemmer::new();
    for e in load_golden() {
        assert_eq!(a.stem(&e.word), b.stem(&e.word));
        assert_eq!(a.stem(&e.word), porter_en::stem(&e.word));
    }
}

#[test]
fn shared_across_threads() {
    let stemmer = std::sync::Arc::new(PorterStemmer::new());
    let entries = std::sync::Arc::new(load_golden());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let stemmer = stemmer.clone();
            let entries = entries.clone();
            std::thread::spawn(move || {
                entries
                    .iter()
                    .skip(t)
                    .step_by(4)
                    .all(|e| stemmer.stem_lower(&e.word) == e.stem)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().expect("worker panicked"));
    }
}

#[test]
fn length_guard_holds_for_short_words() {
    let stemmer = PorterStemmer::new();
    for w in ["", "a", "I", "is", "Ox", "ss", "y", "ed"] {
        assert_eq!(stemmer.stem(w), w);
    }
}
