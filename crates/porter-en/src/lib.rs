//! English Porter stemmer.
//!
//! Reduces an English word to an approximate root by stripping suffixes in
//! six ordered stages, each gated by the consonant-vowel "measure" of the
//! remaining stem. Known irregular forms are resolved from a fixed table
//! before any rule runs.
//!
//! # Architecture
//!
//! - [`porter::state`] -- Per-call scan state, predicates and measure
//! - [`porter::steps`] -- The six rule stages
//! - [`porter::irregular`] -- Irregular-form exception table
//! - [`handle`] -- [`PorterStemmer`], the public entry point

use std::sync::LazyLock;

pub mod handle;
pub mod porter;

pub use handle::{PorterStemmer, Resolution, StemTrace, StemmerError};
pub use porter::IrregularForms;
pub use porter_core::Step;

static DEFAULT_STEMMER: LazyLock<PorterStemmer> = LazyLock::new(PorterStemmer::new);

/// Stem a word with the built-in irregular table, keeping the word's casing.
pub fn stem(word: &str) -> String {
    DEFAULT_STEMMER.stem(word)
}

/// Stem a word with the built-in irregular table and return it lowercased.
pub fn stem_lower(word: &str) -> String {
    DEFAULT_STEMMER.stem_lower(word)
}
