//! # nomina
//!
//! Entity-level transcription accuracy evaluation: how many named entities
//! did the transcription pipeline get right, and how badly did it mangle
//! proper nouns specifically?
//!
//! Proper nouns are disproportionately important and disproportionately
//! mis-transcribed, so entity-level reconciliation gives a sharper signal
//! than whole-transcript word error rate alone.
//!
//! # Pipeline
//!
//! ```text
//! transcript ──► extract ──► entities.json + timeline.json
//!                                   │
//!        truth timeline ────────────┤
//!        candidate timeline ────────┴──► match ──► metrics ──► reports
//! ```
//!
//! - [`extract`]: one blocking call to the external entity-detection
//!   service, folded into an [`occurrence::EntityMap`] and a
//!   position-sorted occurrence timeline.
//! - [`matcher`]: three-pass greedy reconciliation of two timelines into a
//!   1:1 alignment plus unmatched residue; the core of the crate.
//! - [`metrics`]: match rates, proper-noun error rates (PNER/PNWER), and
//!   whole-transcript WER over normalized text.
//! - [`report`]: durable JSON artifacts for every stage.
//!
//! # Example
//!
//! ```rust
//! use nomina::matcher::{match_occurrences, DEFAULT_POSITION_TOLERANCE};
//! use nomina::occurrence::EntityOccurrence;
//!
//! let truth = vec![EntityOccurrence::new(
//!     "Acme Corp", 10, "ORGANIZATION", "[ORGANIZATION_1]",
//!     "we met with Acme Corp yesterday",
//! )];
//! let candidate = truth.clone();
//!
//! let result = match_occurrences(&truth, &candidate, DEFAULT_POSITION_TOLERANCE);
//! assert_eq!(result.matches.len(), 1);
//! assert_eq!(result.matches[0].score, 100.0);
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod metrics;
pub mod normalize;
pub mod occurrence;
pub mod report;
pub mod similarity;

pub use config::ApiConfig;
pub use error::{Error, Result};
pub use extract::ExtractionClient;
pub use matcher::{match_occurrences, Match, MatchResult, DEFAULT_POSITION_TOLERANCE};
pub use metrics::{statistics, Statistics};
pub use normalize::SpokenTextNormalizer;
pub use occurrence::{organize_by_position, EntityMap, EntityOccurrence, EntityRecord};
