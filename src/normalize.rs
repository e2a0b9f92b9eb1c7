//! Spoken-text normalization for whole-transcript comparison.
//!
//! Reference and candidate transcripts come from different pipelines, so
//! surface conventions (casing, punctuation, spelled-out numbers,
//! contractions) differ even where the speech agrees. Both transcripts pass
//! through the same normalizer before the word error rate is computed;
//! entity matching never uses it.
//!
//! The contract is deliberately narrow: lowercase, expand common English
//! contractions, map standalone spelled-out cardinals to digits, strip
//! punctuation, collapse whitespace. Output is deterministic and idempotent.

/// Contractions expanded before punctuation is stripped.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("can't", "cannot"),
    ("n't", " not"),
    ("'re", " are"),
    ("'ve", " have"),
    ("'ll", " will"),
    ("'m", " am"),
    // Possessive/apostrophe-s is ambiguous ("it's" vs "John's"); dropping
    // the apostrophe keeps both sides consistent.
    ("'s", "s"),
];

/// Standalone number words mapped to digits.
const NUMBER_WORDS: &[(&str, &str)] = &[
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventeen", "17"),
    ("eighteen", "18"),
    ("nineteen", "19"),
    ("twenty", "20"),
    ("thirty", "30"),
    ("forty", "40"),
    ("fifty", "50"),
    ("sixty", "60"),
    ("seventy", "70"),
    ("eighty", "80"),
    ("ninety", "90"),
    ("hundred", "100"),
    ("thousand", "1000"),
];

/// English spoken-text normalizer.
///
/// Explicitly constructed and passed to the metrics calculator; there is no
/// shared module-level instance.
#[derive(Debug, Clone, Default)]
pub struct SpokenTextNormalizer;

impl SpokenTextNormalizer {
    /// Create a normalizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Normalize a transcript for word-level comparison.
    pub fn normalize(&self, text: &str) -> String {
        let mut lowered = text.to_lowercase();

        for (pattern, replacement) in CONTRACTIONS {
            lowered = lowered.replace(pattern, replacement);
        }

        // Hyphens and slashes act as word separators in speech.
        let separated: String = lowered
            .chars()
            .map(|c| if c == '-' || c == '/' { ' ' } else { c })
            .collect();

        let cleaned: String = separated
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .map(|word| {
                NUMBER_WORDS
                    .iter()
                    .find(|(spelled, _)| word == *spelled)
                    .map(|(_, digits)| *digits)
                    .unwrap_or(word)
            })
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let normalizer = SpokenTextNormalizer::new();
        assert_eq!(
            normalizer.normalize("Hello, World! How are you?"),
            "hello world how are you"
        );
    }

    #[test]
    fn expands_contractions() {
        let normalizer = SpokenTextNormalizer::new();
        assert_eq!(normalizer.normalize("I can't go"), "i cannot go");
        assert_eq!(normalizer.normalize("they won't say"), "they will not say");
        assert_eq!(normalizer.normalize("we're here"), "we are here");
        assert_eq!(normalizer.normalize("John's book"), "johns book");
    }

    #[test]
    fn maps_number_words() {
        let normalizer = SpokenTextNormalizer::new();
        assert_eq!(normalizer.normalize("twenty seven items"), "20 7 items");
        assert_eq!(normalizer.normalize("Chapter Eleven"), "chapter 11");
    }

    #[test]
    fn number_words_inside_other_words_untouched() {
        let normalizer = SpokenTextNormalizer::new();
        assert_eq!(normalizer.normalize("someone wonderful"), "someone wonderful");
    }

    #[test]
    fn collapses_whitespace_and_separators() {
        let normalizer = SpokenTextNormalizer::new();
        assert_eq!(
            normalizer.normalize("well-known   fact"),
            "well known fact"
        );
    }

    #[test]
    fn idempotent() {
        let normalizer = SpokenTextNormalizer::new();
        let once = normalizer.normalize("It's twenty-one, isn't it?");
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice);
    }
}
