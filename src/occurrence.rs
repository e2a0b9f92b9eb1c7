//! Occurrence data model: located entity mentions within a transcript.
//!
//! An [`EntityOccurrence`] is one mention of one entity at one location.
//! Positions are normalized to [0, 100] so reference and candidate
//! transcripts of different lengths stay comparable. Occurrences are built
//! once by the extractor and consumed read-only by the matcher.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum normalized position value.
pub const MAX_POSITION: u32 = 100;

/// Number of context words kept on each side of a mention.
pub const CONTEXT_WINDOW_WORDS: usize = 10;

/// One mention of one entity at one location in one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityOccurrence {
    /// Surface string as canonicalized by the extractor.
    pub text: String,
    /// Character offset normalized by transcript length, in [0, 100].
    pub position: u32,
    /// Label from the caller-supplied entity-type set (e.g. NAME, ORGANIZATION).
    pub entity_type: String,
    /// Canonical identifier grouping occurrences of the same entity value.
    pub entity_key: String,
    /// Context window of up to 10 words before and after the mention.
    pub sentence: String,
}

impl EntityOccurrence {
    /// Create an occurrence. `position` is clamped to [0, 100].
    pub fn new(
        text: impl Into<String>,
        position: u32,
        entity_type: impl Into<String>,
        entity_key: impl Into<String>,
        sentence: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            position: position.min(MAX_POSITION),
            entity_type: entity_type.into(),
            entity_key: entity_key.into(),
            sentence: sentence.into(),
        }
    }
}

/// One unique entity with parallel arrays of all its occurrence
/// positions and context windows. Persisted as the entity-map artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Canonical surface text of the entity.
    pub text: String,
    /// Best label reported by the extraction service.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Normalized positions of each occurrence, in response order.
    pub positions: Vec<u32>,
    /// Context window for each occurrence, parallel to `positions`.
    pub sentences: Vec<String>,
}

/// Entity map: canonical entity key → record of all its occurrences.
pub type EntityMap = BTreeMap<String, EntityRecord>;

/// Flatten an entity map into a position-sorted occurrence timeline.
///
/// Each (position, sentence) pair in a record yields one occurrence.
/// Records whose parallel arrays disagree in length are truncated to the
/// shorter side (the extractor only appends them together, so in practice
/// they match). The sort is stable: equal positions keep map order.
#[must_use]
pub fn organize_by_position(entities: &EntityMap) -> Vec<EntityOccurrence> {
    let mut occurrences = Vec::new();

    for (entity_key, record) in entities {
        for (position, sentence) in record.positions.iter().zip(record.sentences.iter()) {
            occurrences.push(EntityOccurrence::new(
                record.text.clone(),
                *position,
                record.entity_type.clone(),
                entity_key.clone(),
                sentence.clone(),
            ));
        }
    }

    occurrences.sort_by_key(|occ| occ.position);
    occurrences
}

/// Normalize a character offset against the transcript length, flooring
/// into [0, 100]. A zero-length transcript maps everything to 0.
#[must_use]
pub fn normalize_position(start_offset: usize, text_chars: usize) -> u32 {
    if text_chars == 0 {
        return 0;
    }
    let normalized = (start_offset as f64 / text_chars as f64 * 100.0) as u32;
    normalized.min(MAX_POSITION)
}

/// Extract the context window around a mention: up to
/// [`CONTEXT_WINDOW_WORDS`] words before the mention's first word and the
/// same count after it (the mention's own words fall inside the forward
/// window).
#[must_use]
pub fn context_window(text: &str, start_offset: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();

    // Count how many word starts occur before the mention; a word cut in
    // half by the offset still counts, matching token-prefix semantics.
    let prefix: String = text.chars().take(start_offset).collect();
    let entity_start_word = prefix.split_whitespace().count();

    let start_word = entity_start_word.saturating_sub(CONTEXT_WINDOW_WORDS);
    let end_word = (entity_start_word + CONTEXT_WINDOW_WORDS).min(words.len());

    words[start_word..end_word].join(" ")
}
