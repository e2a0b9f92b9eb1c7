//! End-to-end pipeline test without the network: a persisted extraction
//! response is folded into timelines, reconciled, scored, and written to
//! disk, exercising the same path the CLI drives.

use serde_json::json;

use nomina::extract::parse_entities;
use nomina::matcher::{match_occurrences, DEFAULT_POSITION_TOLERANCE};
use nomina::metrics::statistics;
use nomina::normalize::SpokenTextNormalizer;
use nomina::occurrence::organize_by_position;
use nomina::report::{
    read_timeline, write_entity_map, write_match_result, write_statistics, write_timeline,
    ENTITIES_FILE, MATCHES_FILE, STATISTICS_FILE,
};

/// Build a fake service response for `text`, one entity per (key, label,
/// surface) triple located at the surface's first occurrence.
fn fake_response(text: &str, entities: &[(&str, &str, &str)]) -> serde_json::Value {
    let detected: Vec<serde_json::Value> = entities
        .iter()
        .map(|(key, label, surface)| {
            let start = text.find(surface).expect("surface must occur in text");
            json!({
                "processed_text": key,
                "best_label": label,
                "text": surface,
                "location": {
                    "stt_idx": start,
                    "end_idx": start + surface.chars().count(),
                }
            })
        })
        .collect();
    json!([{ "entities": detected }])
}

#[test]
fn extraction_to_statistics_round_trip() {
    let truth_text =
        "good morning everyone we met with Acme Corp yesterday and Jon Smith will follow up next week";
    let candidate_text =
        "good morning everyone we met with Acme Corp yesterday and John Smith will follow up next week";

    let truth_response = fake_response(
        truth_text,
        &[
            ("[ORGANIZATION_1]", "ORGANIZATION", "Acme Corp"),
            ("[NAME_1]", "NAME", "Jon Smith"),
        ],
    );
    let candidate_response = fake_response(
        candidate_text,
        &[
            ("[ORGANIZATION_1]", "ORGANIZATION", "Acme Corp"),
            ("[NAME_1]", "NAME", "John Smith"),
        ],
    );

    let truth_dir = tempfile::tempdir().unwrap();
    let candidate_dir = tempfile::tempdir().unwrap();
    let report_dir = tempfile::tempdir().unwrap();

    // Extraction side: fold responses, persist both artifacts.
    let truth_entities = parse_entities(&truth_response, truth_text);
    write_entity_map(truth_dir.path(), &truth_entities).unwrap();
    let truth_timeline = organize_by_position(&truth_entities);
    let truth_timeline_path = write_timeline(truth_dir.path(), &truth_timeline).unwrap();

    let candidate_entities = parse_entities(&candidate_response, candidate_text);
    let candidate_timeline = organize_by_position(&candidate_entities);
    let candidate_timeline_path =
        write_timeline(candidate_dir.path(), &candidate_timeline).unwrap();

    assert!(truth_dir.path().join(ENTITIES_FILE).exists());

    // Timelines must survive the disk hop intact and position-ordered.
    let truth_loaded = read_timeline(&truth_timeline_path).unwrap();
    let candidate_loaded = read_timeline(&candidate_timeline_path).unwrap();
    assert_eq!(truth_loaded, truth_timeline);
    assert!(truth_loaded
        .windows(2)
        .all(|pair| pair[0].position <= pair[1].position));

    // Analysis side: match, score, persist.
    let result = match_occurrences(&truth_loaded, &candidate_loaded, DEFAULT_POSITION_TOLERANCE);
    assert_eq!(result.matches.len(), 2, "both entities should reconcile");
    assert!(result.unmatched_truth.is_empty());
    assert!(result.unmatched_transcribed.is_empty());

    // The identical organization matches exactly; the homophone name pairs
    // through the weighted pass with a lower score.
    let org = result
        .matches
        .iter()
        .find(|m| m.truth.entity_type == "ORGANIZATION")
        .unwrap();
    let name = result
        .matches
        .iter()
        .find(|m| m.truth.entity_type == "NAME")
        .unwrap();
    assert_eq!(org.score, 100.0);
    assert!(name.score > 50.0 && name.score < 100.0);

    write_match_result(report_dir.path(), &result).unwrap();

    let normalizer = SpokenTextNormalizer::new();
    let stats = statistics(&result, truth_text, candidate_text, &normalizer).unwrap();
    write_statistics(report_dir.path(), &stats).unwrap();

    assert_eq!(stats.total_entities, 2);
    assert_eq!(stats.match_rate, 1.0);
    // One word of seventeen differs between the transcripts.
    assert!(stats.transcript_wer > 0.0 && stats.transcript_wer < 0.1);

    // Persisted artifacts parse back with the documented shapes.
    let matches_json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(report_dir.path().join(MATCHES_FILE)).unwrap(),
    )
    .unwrap();
    assert_eq!(matches_json["matches"].as_array().unwrap().len(), 2);

    let stats_json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(report_dir.path().join(STATISTICS_FILE)).unwrap(),
    )
    .unwrap();
    for field in [
        "total_entities",
        "total_matches",
        "total_unmatched_truth",
        "total_unmatched_transcribed",
        "match_rate",
        "unmatched_truth_rate",
        "unmatched_transcribed_rate",
        "average_match_score",
        "pner",
        "pnwer",
        "transcript_wer",
    ] {
        assert!(stats_json.get(field).is_some(), "statistics missing {}", field);
    }
}

#[test]
fn timeline_entries_carry_all_fields() {
    let text = "the quarterly call opened with remarks from Dana Whitfield about the roadmap";
    let response = fake_response(text, &[("[NAME_1]", "NAME", "Dana Whitfield")]);

    let entities = parse_entities(&response, text);
    let timeline = organize_by_position(&entities);
    assert_eq!(timeline.len(), 1);

    let occurrence = &timeline[0];
    assert_eq!(occurrence.text, "Dana Whitfield");
    assert_eq!(occurrence.entity_type, "NAME");
    assert_eq!(occurrence.entity_key, "[NAME_1]");
    assert!(occurrence.position <= 100);
    assert!(
        occurrence.sentence.contains("Dana Whitfield"),
        "context window must cover the mention"
    );
    assert!(!occurrence.sentence.is_empty());
}
