//! Entity reconciliation between a reference and a candidate transcript.
//!
//! Given two position-ordered occurrence timelines with no alignment
//! supplied, [`match_occurrences`] builds a 1:1 pairing of occurrences that
//! likely denote the same real-world mention, tolerating shifted positions
//! and transcription noise (misspellings, homophones, phonetic confusions).
//!
//! # Algorithm
//!
//! Three greedy passes, each relaxing the previous pass's constraints and
//! operating only on what remains unmatched. Passes run in fixed order and
//! never revisit earlier decisions; no global assignment is attempted.
//!
//! 1. **Exact**: case-insensitive text equality, position within tolerance,
//!    sentence-context similarity above a gate. First satisfying reference
//!    wins; the match scores a flat 100.
//! 2. **Weighted, position-gated**: same entity type and position within
//!    tolerance; a weighted blend of sentence, position, text, and phonetic
//!    similarity. Best reference wins if the blend exceeds 50.
//! 3. **Weighted, relaxed**: same entity type, any position; sentence, text,
//!    and phonetic similarity reweighted with the position term dropped.
//!    Best reference wins only above a stricter bar of 80, since the
//!    positional evidence is gone.
//!
//! Earlier candidates get first pick of the available references even when a
//! later candidate would have paired better; this order dependence is part
//! of the observable contract, not an accident.

use serde::{Deserialize, Serialize};

use crate::occurrence::EntityOccurrence;
use crate::similarity::{ratio, PhoneticEncoder};

/// Default maximum normalized-position difference for the gated passes.
pub const DEFAULT_POSITION_TOLERANCE: u32 = 10;

/// Sentence-similarity gate for pass 1.
const PASS1_SENTENCE_GATE: f64 = 80.0;

/// Minimum weighted score accepted by pass 2.
const PASS2_ACCEPT: f64 = 50.0;

/// Minimum weighted score accepted by pass 3.
const PASS3_ACCEPT: f64 = 80.0;

/// A claimed correspondence between one reference occurrence and one
/// candidate occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The reference (ground-truth) occurrence.
    pub truth: EntityOccurrence,
    /// The candidate (transcribed) occurrence.
    pub transcribed: EntityOccurrence,
    /// Confidence in [0, 100]; pass-1 matches always score 100.
    pub score: f64,
}

/// Outcome of reconciliation: the pairing plus the leftover occurrences on
/// each side. Every input occurrence lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Accepted pairings, in the order the passes accepted them.
    pub matches: Vec<Match>,
    /// Reference occurrences no candidate claimed.
    pub unmatched_truth: Vec<EntityOccurrence>,
    /// Candidate occurrences no reference satisfied.
    pub unmatched_transcribed: Vec<EntityOccurrence>,
}

/// Reconcile two occurrence timelines.
///
/// `reference` is the ground-truth timeline, `candidate` the transcribed
/// one; both are consumed read-only. The claimed/unclaimed state lives in
/// side vectors, so the input order is never disturbed and the result is
/// deterministic for a given pair of timelines.
#[must_use]
pub fn match_occurrences(
    reference: &[EntityOccurrence],
    candidate: &[EntityOccurrence],
    position_tolerance: u32,
) -> MatchResult {
    let encoder = PhoneticEncoder::new();

    let mut truth_claimed = vec![false; reference.len()];
    let mut transcribed_claimed = vec![false; candidate.len()];
    let mut matches = Vec::new();

    // Pass 1: exact text, close position, similar context. First-fit: when
    // several references tie, the earliest-listed wins.
    for (ci, trans) in candidate.iter().enumerate() {
        for (ri, truth) in reference.iter().enumerate() {
            if truth_claimed[ri] {
                continue;
            }
            let text_equal = trans.text.to_lowercase() == truth.text.to_lowercase();
            if text_equal && trans.position.abs_diff(truth.position) <= position_tolerance {
                let sentence_similarity = ratio(&trans.sentence, &truth.sentence);
                if sentence_similarity > PASS1_SENTENCE_GATE {
                    matches.push(Match {
                        truth: truth.clone(),
                        transcribed: trans.clone(),
                        score: 100.0,
                    });
                    truth_claimed[ri] = true;
                    transcribed_claimed[ci] = true;
                    break;
                }
            }
        }
    }

    // Pass 2: weighted blend with the position gate still in force.
    for (ci, trans) in candidate.iter().enumerate() {
        if transcribed_claimed[ci] {
            continue;
        }

        let mut best_index = None;
        let mut best_score = 0.0;

        for (ri, truth) in reference.iter().enumerate() {
            if truth_claimed[ri]
                || trans.entity_type != truth.entity_type
                || trans.position.abs_diff(truth.position) > position_tolerance
            {
                continue;
            }

            let sentence_similarity = ratio(&trans.sentence, &truth.sentence);
            let text_similarity =
                ratio(&trans.text.to_lowercase(), &truth.text.to_lowercase());
            let phonetic_similarity = encoder.similarity(&trans.text, &truth.text);

            // Unclamped: a large-but-tolerated offset drags the blend down.
            let position_score =
                100.0 - f64::from(trans.position.abs_diff(truth.position)) * 10.0;

            let score = 0.5 * sentence_similarity
                + 0.3 * position_score
                + 0.15 * text_similarity
                + 0.05 * phonetic_similarity;

            if score > best_score {
                best_score = score;
                best_index = Some(ri);
            }
        }

        if let Some(ri) = best_index {
            if best_score > PASS2_ACCEPT {
                matches.push(Match {
                    truth: reference[ri].clone(),
                    transcribed: trans.clone(),
                    score: best_score,
                });
                truth_claimed[ri] = true;
                transcribed_claimed[ci] = true;
            }
        }
    }

    // Pass 3: no position gate; the pairs left here already failed
    // proximity, so the acceptance bar rises instead.
    for (ci, trans) in candidate.iter().enumerate() {
        if transcribed_claimed[ci] {
            continue;
        }

        let mut best_index = None;
        let mut best_score = 0.0;

        for (ri, truth) in reference.iter().enumerate() {
            if truth_claimed[ri] || trans.entity_type != truth.entity_type {
                continue;
            }

            let sentence_similarity = ratio(&trans.sentence, &truth.sentence);
            let text_similarity =
                ratio(&trans.text.to_lowercase(), &truth.text.to_lowercase());
            let phonetic_similarity = encoder.similarity(&trans.text, &truth.text);

            let score = 0.6 * sentence_similarity
                + 0.3 * text_similarity
                + 0.1 * phonetic_similarity;

            if score > best_score {
                best_score = score;
                best_index = Some(ri);
            }
        }

        if let Some(ri) = best_index {
            if best_score > PASS3_ACCEPT {
                matches.push(Match {
                    truth: reference[ri].clone(),
                    transcribed: trans.clone(),
                    score: best_score,
                });
                truth_claimed[ri] = true;
                transcribed_claimed[ci] = true;
            }
        }
    }

    let unmatched_truth = reference
        .iter()
        .enumerate()
        .filter(|(ri, _)| !truth_claimed[*ri])
        .map(|(_, occ)| occ.clone())
        .collect();

    let unmatched_transcribed = candidate
        .iter()
        .enumerate()
        .filter(|(ci, _)| !transcribed_claimed[*ci])
        .map(|(_, occ)| occ.clone())
        .collect();

    MatchResult {
        matches,
        unmatched_truth,
        unmatched_transcribed,
    }
}
