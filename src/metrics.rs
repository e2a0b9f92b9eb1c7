//! Aggregate accuracy statistics derived from a reconciliation result.
//!
//! Entity-level signals (match rate, proper-noun error rates) come from the
//! [`MatchResult`]; the whole-transcript word error rate is computed
//! independently from the two raw transcripts after spoken-text
//! normalization. Statistics are computed once per run and never mutated.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matcher::MatchResult;
use crate::normalize::SpokenTextNormalizer;
use crate::similarity::{jaro_winkler, word_distance};

/// Read-only aggregate statistics for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Matched + unmatched-reference + unmatched-candidate counts, summed.
    pub total_entities: usize,
    /// Number of accepted matches.
    pub total_matches: usize,
    /// Reference occurrences left unmatched.
    pub total_unmatched_truth: usize,
    /// Candidate occurrences left unmatched.
    pub total_unmatched_transcribed: usize,
    /// `total_matches / total_entities`, 0 when there are no entities.
    pub match_rate: f64,
    /// `total_unmatched_truth / total_entities`, 0 when there are no entities.
    pub unmatched_truth_rate: f64,
    /// `total_unmatched_transcribed / total_entities`, 0 when there are no entities.
    pub unmatched_transcribed_rate: f64,
    /// Mean match score, 0 when there are no matches.
    pub average_match_score: f64,
    /// Proper-noun error rate: mean Jaro-Winkler distance over matched pairs.
    pub pner: f64,
    /// Proper-noun word error rate over the matched pair lists.
    pub pnwer: f64,
    /// Whole-transcript word error rate after normalization.
    pub transcript_wer: f64,
}

/// Proper-noun error rate over matched texts, paired in match order.
///
/// Each pair contributes `1 - jaro_winkler(truth, transcribed)`; the sum is
/// divided by the reference count. 0 when `truth_entities` is empty. This is
/// per-pair distance, not aggregated edit distance over the whole sequence.
#[must_use]
pub fn proper_noun_error_rate(truth_entities: &[String], transcribed_entities: &[String]) -> f64 {
    if truth_entities.is_empty() {
        return 0.0;
    }

    let total_distance: f64 = truth_entities
        .iter()
        .zip(transcribed_entities.iter())
        .map(|(truth, transcribed)| 1.0 - jaro_winkler(truth, transcribed))
        .sum();

    total_distance / truth_entities.len() as f64
}

/// Proper-noun word error rate over matched texts.
///
/// Substitutions are exact, case-sensitive inequalities between paired
/// texts; any length mismatch between the two lists counts as insertions or
/// deletions. With one entry per match the lists are equal-length, so those
/// terms are zero in practice. 0 when `truth_entities` is empty.
#[must_use]
pub fn proper_noun_word_error_rate(
    truth_entities: &[String],
    transcribed_entities: &[String],
) -> f64 {
    if truth_entities.is_empty() {
        return 0.0;
    }

    let substitutions = truth_entities
        .iter()
        .zip(transcribed_entities.iter())
        .filter(|(truth, transcribed)| truth != transcribed)
        .count();
    let deletions = truth_entities.len().saturating_sub(transcribed_entities.len());
    let insertions = transcribed_entities.len().saturating_sub(truth_entities.len());

    (substitutions + deletions + insertions) as f64 / truth_entities.len() as f64
}

/// Whole-transcript word error rate.
///
/// Both transcripts are normalized with the same spoken-text normalizer,
/// then the word-level Levenshtein distance is divided by the reference
/// word count. An empty normalized reference only admits an empty candidate
/// (WER 0); otherwise the rate is undefined and reported as invalid input.
pub fn transcript_word_error_rate(
    normalizer: &SpokenTextNormalizer,
    truth_text: &str,
    transcribed_text: &str,
) -> Result<f64> {
    let normalized_truth = normalizer.normalize(truth_text);
    let normalized_transcribed = normalizer.normalize(transcribed_text);

    let truth_words: Vec<&str> = normalized_truth.split_whitespace().collect();
    let transcribed_words: Vec<&str> = normalized_transcribed.split_whitespace().collect();

    if truth_words.is_empty() {
        if transcribed_words.is_empty() {
            return Ok(0.0);
        }
        return Err(Error::invalid_input(
            "word error rate is undefined for an empty reference transcript",
        ));
    }

    let distance = word_distance(&truth_words, &transcribed_words);
    Ok(distance as f64 / truth_words.len() as f64)
}

/// Compute the full statistics block for one run.
pub fn statistics(
    result: &MatchResult,
    truth_transcript: &str,
    transcribed_transcript: &str,
    normalizer: &SpokenTextNormalizer,
) -> Result<Statistics> {
    let total_matches = result.matches.len();
    let total_unmatched_truth = result.unmatched_truth.len();
    let total_unmatched_transcribed = result.unmatched_transcribed.len();
    let total_entities = total_matches + total_unmatched_truth + total_unmatched_transcribed;

    let average_match_score = if total_matches > 0 {
        result.matches.iter().map(|m| m.score).sum::<f64>() / total_matches as f64
    } else {
        0.0
    };

    let rate = |count: usize| {
        if total_entities > 0 {
            count as f64 / total_entities as f64
        } else {
            0.0
        }
    };

    let truth_proper_nouns: Vec<String> =
        result.matches.iter().map(|m| m.truth.text.clone()).collect();
    let transcribed_proper_nouns: Vec<String> = result
        .matches
        .iter()
        .map(|m| m.transcribed.text.clone())
        .collect();

    let transcript_wer =
        transcript_word_error_rate(normalizer, truth_transcript, transcribed_transcript)?;

    Ok(Statistics {
        total_entities,
        total_matches,
        total_unmatched_truth,
        total_unmatched_transcribed,
        match_rate: rate(total_matches),
        unmatched_truth_rate: rate(total_unmatched_truth),
        unmatched_transcribed_rate: rate(total_unmatched_transcribed),
        average_match_score,
        pner: proper_noun_error_rate(&truth_proper_nouns, &transcribed_proper_nouns),
        pnwer: proper_noun_word_error_rate(&truth_proper_nouns, &transcribed_proper_nouns),
        transcript_wer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Match;
    use crate::occurrence::EntityOccurrence;

    fn occ(text: &str, position: u32) -> EntityOccurrence {
        EntityOccurrence::new(text, position, "NAME", format!("[{}]", text), "some context")
    }

    fn matched(truth: &str, transcribed: &str, score: f64) -> Match {
        Match {
            truth: occ(truth, 10),
            transcribed: occ(transcribed, 12),
            score,
        }
    }

    #[test]
    fn pner_zero_on_empty_reference() {
        assert_eq!(proper_noun_error_rate(&[], &["anything".to_string()]), 0.0);
        assert_eq!(proper_noun_word_error_rate(&[], &["anything".to_string()]), 0.0);
    }

    #[test]
    fn pner_zero_on_identical_pairs() {
        let names = vec!["Ada Lovelace".to_string(), "Acme Corp".to_string()];
        assert!(proper_noun_error_rate(&names, &names).abs() < 1e-9);
    }

    #[test]
    fn pner_positive_on_misspelling() {
        let truth = vec!["Jon Smith".to_string()];
        let transcribed = vec!["John Smith".to_string()];
        let pner = proper_noun_error_rate(&truth, &transcribed);
        assert!(pner > 0.0 && pner < 0.5, "small edit should give small PNER, got {}", pner);
    }

    #[test]
    fn pnwer_counts_case_sensitive_substitutions() {
        let truth = vec!["Acme".to_string(), "Zenith".to_string()];
        let transcribed = vec!["acme".to_string(), "Zenith".to_string()];
        assert!((proper_noun_word_error_rate(&truth, &transcribed) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn pnwer_length_mismatch_counts_deletions() {
        let truth = vec!["Acme".to_string(), "Zenith".to_string()];
        let transcribed = vec!["Acme".to_string()];
        assert!((proper_noun_word_error_rate(&truth, &transcribed) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn wer_identical_transcripts_is_zero() {
        let normalizer = SpokenTextNormalizer::new();
        let wer = transcript_word_error_rate(
            &normalizer,
            "We met with Acme Corp yesterday.",
            "we met with acme corp yesterday",
        )
        .unwrap();
        assert!(wer.abs() < 1e-9, "normalization should erase surface differences");
    }

    #[test]
    fn wer_single_deletion() {
        let normalizer = SpokenTextNormalizer::new();
        let wer = transcript_word_error_rate(
            &normalizer,
            "the quick brown fox jumps",
            "the quick brown fox",
        )
        .unwrap();
        assert!((wer - 0.2).abs() < 1e-9, "one deletion over five words, got {}", wer);
    }

    #[test]
    fn wer_empty_reference_empty_candidate() {
        let normalizer = SpokenTextNormalizer::new();
        assert_eq!(transcript_word_error_rate(&normalizer, "", "").unwrap(), 0.0);
        assert!(transcript_word_error_rate(&normalizer, "", "something").is_err());
    }

    #[test]
    fn statistics_empty_inputs() {
        let normalizer = SpokenTextNormalizer::new();
        let result = MatchResult::default();
        let stats = statistics(&result, "same words", "same words", &normalizer).unwrap();

        assert_eq!(stats.total_entities, 0);
        assert_eq!(stats.match_rate, 0.0);
        assert_eq!(stats.average_match_score, 0.0);
        assert_eq!(stats.pner, 0.0);
        assert_eq!(stats.pnwer, 0.0);
    }

    #[test]
    fn statistics_rates_sum_to_one() {
        let normalizer = SpokenTextNormalizer::new();
        let result = MatchResult {
            matches: vec![matched("Acme", "Acme", 100.0)],
            unmatched_truth: vec![occ("Zenith", 40)],
            unmatched_transcribed: vec![occ("Globex", 80)],
        };
        let stats = statistics(&result, "a b c", "a b c", &normalizer).unwrap();

        assert_eq!(stats.total_entities, 3);
        let sum = stats.match_rate + stats.unmatched_truth_rate + stats.unmatched_transcribed_rate;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn average_score_within_bounds() {
        let normalizer = SpokenTextNormalizer::new();
        let result = MatchResult {
            matches: vec![
                matched("Acme", "Acme", 100.0),
                matched("Jon", "John", 62.5),
            ],
            unmatched_truth: vec![],
            unmatched_transcribed: vec![],
        };
        let stats = statistics(&result, "a", "a", &normalizer).unwrap();
        assert!(stats.average_match_score >= 62.5 && stats.average_match_score <= 100.0);
        assert!((stats.average_match_score - 81.25).abs() < 1e-9);
    }
}
