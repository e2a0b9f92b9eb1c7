//! Scoring primitives for entity reconciliation.
//!
//! Thin wrappers over the external similarity crates so the matcher and the
//! metrics calculator consume documented contracts rather than raw crate
//! APIs:
//!
//! - [`ratio`]: normalized edit-distance similarity on a 0-100 scale
//! - [`jaro_winkler`]: Jaro-Winkler similarity in [0.0, 1.0]
//! - [`PhoneticEncoder`]: Double Metaphone codes and slot-wise code similarity
//! - [`word_distance`]: word-level Levenshtein distance (the WER numerator)

use rphonetic::DoubleMetaphone;

/// Normalized string similarity on a 0-100 scale.
///
/// 100 = identical, 0 = nothing in common. Two empty inputs score 0, the
/// convention of the fuzzy-ratio primitive this stands in for (relevant when
/// comparing absent phonetic codes).
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Jaro-Winkler similarity in [0.0, 1.0]; 1.0 = identical.
///
/// Used by the proper-noun error rate, where each matched pair contributes
/// `1 - jaro_winkler(truth, transcribed)`.
#[must_use]
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(a, b)
}

/// Word-level Levenshtein distance between two token sequences.
///
/// Counts the substitutions, insertions, and deletions needed to turn
/// `reference` into `hypothesis`; dividing by the reference length yields
/// the word error rate.
#[must_use]
pub fn word_distance(reference: &[&str], hypothesis: &[&str]) -> usize {
    strsim::generic_levenshtein(&reference.to_vec(), &hypothesis.to_vec())
}

/// Double Metaphone encoder with slot-wise code comparison.
///
/// One encoder is constructed per matching run and passed where needed; it
/// is not a module-level global.
#[derive(Debug, Default)]
pub struct PhoneticEncoder {
    metaphone: DoubleMetaphone,
}

impl PhoneticEncoder {
    /// Create an encoder with default Double Metaphone settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary and alternate Double Metaphone codes for `text`.
    ///
    /// Either slot may be empty when the input has no encodable letters.
    #[must_use]
    pub fn codes(&self, text: &str) -> (String, String) {
        let result = self.metaphone.double_metaphone(text);
        (result.primary(), result.alternate())
    }

    /// Phonetic similarity between two surface strings on a 0-100 scale:
    /// the maximum of [`ratio`] over matching code slots (primary against
    /// primary, alternate against alternate), absent codes compared as
    /// empty strings.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let (a_primary, a_alternate) = self.codes(a);
        let (b_primary, b_alternate) = self.codes(b);

        ratio(&a_primary, &b_primary).max(ratio(&a_alternate, &b_alternate))
    }
}
