// PorterStemmer: top-level entry point for English stemming.
//
// Owns the irregular-form table and runs each word through a fresh
// StemmingState: table lookup, short-word bypass, the six rule stages,
// then extraction of the active region. Case restoration happens last and
// reads the boundary cursor left behind by the final stage.
//
// The handle is immutable after construction, so one instance can serve
// any number of threads.

use porter_core::Step;
use porter_core::case::restore_case;
use porter_core::character::ascii_lower_chars;

use crate::porter::irregular::IrregularForms;
use crate::porter::state::StemmingState;
use crate::porter::steps;

/// Error type for stemmer configuration.
///
/// Stemming itself never fails; errors only come from building or loading
/// an irregular-form table.
#[derive(Debug, thiserror::Error)]
pub enum StemmerError {
    /// A stem or surface form in an irregular listing is empty.
    #[error("empty irregular form entry for stem {stem:?}")]
    EmptyEntry { stem: String },

    /// One surface form is listed under two different stems.
    #[error("surface form {form:?} is listed under both {first:?} and {second:?}")]
    ConflictingForm {
        form: String,
        first: String,
        second: String,
    },

    /// A listing line is not of the form `stem: form ...`.
    #[error("malformed irregular form listing at line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// The listing file could not be read.
    #[error("failed to read irregular form listing: {0}")]
    Io(#[from] std::io::Error),
}

/// How a word was turned into its stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Found in the irregular-form table; no rule ran.
    Irregular,
    /// Two characters or fewer; returned unchanged.
    TooShort,
    /// Went through the rule pipeline.
    Pipeline,
}

/// Step-by-step record of one stemming run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemTrace {
    /// How the word was resolved.
    pub resolution: Resolution,
    /// Active region after each stage. Empty unless `resolution` is `Pipeline`.
    pub steps: Vec<(Step, String)>,
    /// Final lowercase stem.
    pub stem: String,
}

/// Result of one run before case restoration.
struct Stemmed {
    stem: Vec<char>,
    /// Exclusive bound for case restoration.
    case_bound: usize,
    resolution: Resolution,
}

/// English suffix-stripping stemmer.
///
/// ```
/// use porter_en::PorterStemmer;
///
/// let stemmer = PorterStemmer::new();
/// assert_eq!(stemmer.stem_lower("relational"), "relat");
/// assert_eq!(stemmer.stem("Hopping"), "Hop");
/// assert_eq!(stemmer.stem_lower("skies"), "sky");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer {
    irregular: IrregularForms,
}

impl PorterStemmer {
    /// Create a stemmer with the built-in irregular-form table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stemmer with a custom irregular-form table.
    pub fn with_irregular_forms(irregular: IrregularForms) -> Self {
        Self { irregular }
    }

    /// The irregular-form table consulted before the pipeline.
    pub fn irregular_forms(&self) -> &IrregularForms {
        &self.irregular
    }

    // =========================================================================
    // Stemming
    // =========================================================================

    /// Stem a word and map the result back onto the word's casing.
    ///
    /// Words of two characters or fewer come back unchanged.
    pub fn stem(&self, word: &str) -> String {
        let original: Vec<char> = word.chars().collect();
        let stemmed = self.run(ascii_lower_chars(word), |_, _| {});
        restore_case(&original, &stemmed.stem, stemmed.case_bound)
    }

    /// Stem a word and return the lowercase stem.
    pub fn stem_lower(&self, word: &str) -> String {
        self.run(ascii_lower_chars(word), |_, _| {})
            .stem
            .into_iter()
            .collect()
    }

    /// Run the full pipeline and record the region after every stage.
    pub fn trace(&self, word: &str) -> StemTrace {
        let mut steps = Vec::new();
        let stemmed = self.run(ascii_lower_chars(word), |step, st| {
            steps.push((step, st.region().iter().collect()));
        });
        StemTrace {
            resolution: stemmed.resolution,
            steps,
            stem: stemmed.stem.into_iter().collect(),
        }
    }

    /// Run a single stage on the lowercased word, in isolation.
    ///
    /// The irregular table and the short-word bypass apply first, exactly as
    /// in [`stem_lower`](Self::stem_lower).
    pub fn apply_step(&self, word: &str, step: Step) -> String {
        let lower = ascii_lower_chars(word);
        if let Some((_, stem)) = self.bypass(&lower) {
            return stem.into_iter().collect();
        }
        let mut st = StemmingState::new(lower);
        steps::apply(step, &mut st);
        st.region().iter().collect()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Irregular-table hit or short-word bypass, if either applies.
    fn bypass(&self, lower: &[char]) -> Option<(Resolution, Vec<char>)> {
        let text: String = lower.iter().collect();
        if let Some(stem) = self.irregular.lookup(&text) {
            return Some((Resolution::Irregular, stem.chars().collect()));
        }
        if lower.len() <= 2 {
            return Some((Resolution::TooShort, lower.to_vec()));
        }
        None
    }

    fn run(&self, lower: Vec<char>, mut observe: impl FnMut(Step, &StemmingState)) -> Stemmed {
        if let Some((resolution, stem)) = self.bypass(&lower) {
            tracing::trace!(?resolution, "bypassed rule pipeline");
            return Stemmed {
                case_bound: stem.len(),
                stem,
                resolution,
            };
        }

        let mut st = StemmingState::new(lower);
        for step in Step::ALL {
            steps::apply(step, &mut st);
            observe(step, &st);
        }
        let case_bound = st.cursor();
        let stem = st.into_region();
        tracing::trace!(stem_len = stem.len(), case_bound, "stemmed through pipeline");
        Stemmed {
            stem,
            case_bound,
            resolution: Resolution::Pipeline,
        }
    }
}
