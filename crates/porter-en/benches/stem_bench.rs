// Criterion benchmarks for porter-en.
//
// Uses the golden vocabulary from tests/golden/words.json as input.
//
// Run:
//   cargo bench -p porter-en

use criterion::{Criterion, criterion_group, criterion_main};
use porter_en::{PorterStemmer, Step};

fn load_words() -> Vec<String> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/words.json");
    let contents = std::fs::read_to_string(&path).unwrap_or_default();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&contents).unwrap_or_default();
    entries
        .iter()
        .filter_map(|e| e.get("word").and_then(|w| w.as_str()).map(str::to_string))
        .collect()
}

/// Lowercase stems for the whole vocabulary.
fn bench_stem_lower(c: &mut Criterion) {
    let stemmer = PorterStemmer::new();
    let words = load_words();

    c.bench_function("stem_lower_vocabulary", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(stemmer.stem_lower(word));
            }
        });
    });
}

/// Case-restored stems for the uppercased vocabulary.
fn bench_stem_cased(c: &mut Criterion) {
    let stemmer = PorterStemmer::new();
    let words: Vec<String> = load_words()
        .iter()
        .map(|w| w.to_ascii_uppercase())
        .collect();

    c.bench_function("stem_cased_vocabulary", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(stemmer.stem(word));
            }
        });
    });
}

/// Each stage in isolation on the vocabulary.
fn bench_single_steps(c: &mut Criterion) {
    let stemmer = PorterStemmer::new();
    let words = load_words();

    let mut group = c.benchmark_group("apply_step");
    for step in Step::ALL {
        group.bench_function(step.name(), |b| {
            b.iter(|| {
                for word in &words {
                    std::hint::black_box(stemmer.apply_step(word, step));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stem_lower, bench_stem_cased, bench_single_steps);
criterion_main!(benches);
