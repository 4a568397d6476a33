use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

/// Match quality on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    pub const NONE: Confidence = Confidence(0);
    pub const DEFAULT: Confidence = Confidence(50);
    pub const CASE_INSENSITIVE: Confidence = Confidence(95);
    pub const EXACT: Confidence = Confidence(100);

    /// Clamps to 100
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_exact(&self) -> bool {
        *self == Self::EXACT
    }
}

/// Assigns a confidence to a candidate given the text the caller asked for
pub trait ConfidenceScorer: Send + Sync {
    fn score(&self, original: &str, candidate: &str) -> Confidence;
}

/// Three-level heuristic: exact, case-insensitive, everything else.
///
/// The repository is a term lookup rather than a translation memory, so no
/// finer lexical similarity is computed. Swap in another [`ConfidenceScorer`]
/// for an edit-distance metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredScorer;

impl ConfidenceScorer for TieredScorer {
    fn score(&self, original: &str, candidate: &str) -> Confidence {
        if original == candidate || original.nfc().eq(candidate.nfc()) {
            return Confidence::EXACT;
        }

        let original = original.nfc().collect::<String>();
        let candidate = candidate.nfc().collect::<String>();
        // whole-string mappings handle final sigma and multi-char forms like ß -> SS
        if original.to_lowercase() == candidate.to_lowercase()
            || original.to_uppercase() == candidate.to_uppercase()
        {
            return Confidence::CASE_INSENSITIVE;
        }

        Confidence::DEFAULT
    }
}

/// Scores with the default [`TieredScorer`]
pub fn score(original: &str, candidate: &str) -> Confidence {
    TieredScorer.score(original, candidate)
}
