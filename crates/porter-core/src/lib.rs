//! Shared types for the Porter stemmer workspace.
//!
//! This crate holds the language-neutral pieces used by the English stemmer
//! and the command-line tools:
//!
//! - [`step`] -- Identifiers for the six rule-pipeline stages
//! - [`character`] -- ASCII letter classification and lowercasing
//! - [`case`] -- Mapping a lowercase stem back onto the original casing

pub mod case;
pub mod character;
pub mod step;

pub use step::Step;

/// Error type for the shared core types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("unknown pipeline step: {0}")]
    UnknownStep(String),
}
