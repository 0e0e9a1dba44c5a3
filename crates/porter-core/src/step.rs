// Pipeline step identifiers

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// One stage of the suffix-stripping pipeline.
///
/// Variants are declared in execution order; each stage observes the region
/// left behind by the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Plurals, `-ed` and `-ing`: "caresses" -> "caress", "hopping" -> "hop".
    Plurals,
    /// Terminal `y` after a consonant becomes `i`: "happy" -> "happi".
    TerminalY,
    /// Double suffixes collapse to single ones: "-ization" -> "-ize".
    DoubleSuffixes,
    /// `-ic-`, `-ful`, `-ness` and friends: "hopeful" -> "hope".
    DerivationalSuffixes,
    /// Residual suffix removal in long stems: "-ant", "-ence", "-ive".
    SuffixRemoval,
    /// Final `-e` and `-ll` cleanup.
    FinalCleanup,
}

impl Step {
    /// All steps in execution order.
    pub const ALL: [Step; 6] = [
        Step::Plurals,
        Step::TerminalY,
        Step::DoubleSuffixes,
        Step::DerivationalSuffixes,
        Step::SuffixRemoval,
        Step::FinalCleanup,
    ];

    /// 1-based position of the step in the pipeline.
    pub fn number(self) -> u8 {
        match self {
            Step::Plurals => 1,
            Step::TerminalY => 2,
            Step::DoubleSuffixes => 3,
            Step::DerivationalSuffixes => 4,
            Step::SuffixRemoval => 5,
            Step::FinalCleanup => 6,
        }
    }

    /// Kebab-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Step::Plurals => "plurals",
            Step::TerminalY => "terminal-y",
            Step::DoubleSuffixes => "double-suffixes",
            Step::DerivationalSuffixes => "derivational-suffixes",
            Step::SuffixRemoval => "suffix-removal",
            Step::FinalCleanup => "final-cleanup",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Step {
    type Err = CoreError;

    /// Accepts either the step name or its number ("3" or "double-suffixes").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Step::ALL
            .into_iter()
            .find(|step| step.name() == wanted || step.number().to_string() == wanted)
            .ok_or_else(|| CoreError::UnknownStep(s.to_string()))
    }
}
