//! Durable JSON artifacts: entity map, occurrence timeline, match report,
//! and statistics.
//!
//! Every artifact is a pure function of its inputs, so a persisted pair of
//! timelines is enough to reproduce matching and metrics without calling
//! the extraction service again.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::matcher::MatchResult;
use crate::metrics::Statistics;
use crate::occurrence::{EntityMap, EntityOccurrence};

/// File name of the persisted entity map.
pub const ENTITIES_FILE: &str = "entities.json";

/// File name of the persisted occurrence timeline.
pub const TIMELINE_FILE: &str = "timeline.json";

/// File name of the persisted match report.
pub const MATCHES_FILE: &str = "matches.json";

/// File name of the persisted statistics.
pub const STATISTICS_FILE: &str = "statistics.json";

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::invalid_input(format!(
                    "Failed to create output directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| {
        Error::invalid_input(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok(())
}

/// Persist the entity map as `entities.json` in `output_dir`.
pub fn write_entity_map(output_dir: &Path, entities: &EntityMap) -> Result<PathBuf> {
    let path = output_dir.join(ENTITIES_FILE);
    write_json(&path, entities)?;
    info!("Entities saved to {}", path.display());
    Ok(path)
}

/// Persist the occurrence timeline as `timeline.json` in `output_dir`.
///
/// List order is position order; readers rely on it.
pub fn write_timeline(output_dir: &Path, timeline: &[EntityOccurrence]) -> Result<PathBuf> {
    let path = output_dir.join(TIMELINE_FILE);
    write_json(&path, &timeline)?;
    info!("Timeline saved to {}", path.display());
    Ok(path)
}

/// Persist the match report as `matches.json` in `output_dir`.
pub fn write_match_result(output_dir: &Path, result: &MatchResult) -> Result<PathBuf> {
    let path = output_dir.join(MATCHES_FILE);
    write_json(&path, result)?;
    info!("Matching results saved to {}", path.display());
    Ok(path)
}

/// Persist the statistics as `statistics.json` in `output_dir`.
pub fn write_statistics(output_dir: &Path, stats: &Statistics) -> Result<PathBuf> {
    let path = output_dir.join(STATISTICS_FILE);
    write_json(&path, stats)?;
    info!("Statistics saved to {}", path.display());
    Ok(path)
}

/// Load a persisted occurrence timeline.
pub fn read_timeline(path: &Path) -> Result<Vec<EntityOccurrence>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::invalid_input(format!("Failed to read timeline {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::invalid_input(format!(
            "Malformed timeline JSON in {}: {}",
            path.display(),
            e
        ))
    })
}
