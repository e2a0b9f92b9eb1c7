//! Client for the external entity extraction service.
//!
//! One blocking POST carries the whole transcript and the enabled
//! entity-type list; the response is folded into an [`EntityMap`] and then a
//! position-sorted occurrence timeline. Parsing is a pure function of the
//! response and the transcript text, so persisted responses can be re-run
//! without touching the network.
//!
//! Malformed entity records are skipped with a warning rather than aborting
//! the run; authentication and rate-limit failures are logged specifically
//! and propagated. There is no retry or backoff.

use std::time::Duration;

use log::{error, info, warn};
use serde_json::{json, Value};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::occurrence::{context_window, normalize_position, EntityMap, EntityRecord};

/// Request timeout for the extraction call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Blocking client for the extraction service.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    config: ApiConfig,
}

impl ExtractionClient {
    /// Create a client from a resolved configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Detect entities of the given types across the whole transcript and
    /// fold the response into an entity map.
    pub fn extract_entities(&self, text: &str, desired_types: &[String]) -> Result<EntityMap> {
        let response = self.process_text(text, desired_types)?;
        Ok(parse_entities(&response, text))
    }

    /// Issue the raw service request and return the parsed JSON body.
    pub fn process_text(&self, text: &str, desired_types: &[String]) -> Result<Value> {
        info!("Requesting entity detection from {}", self.config.endpoint);

        let entity_types: Vec<Value> = desired_types
            .iter()
            .map(|entity_type| json!({ "type": "ENABLE", "value": [entity_type] }))
            .collect();

        let payload = json!({
            "text": [text],
            "link_batch": false,
            "entity_detection": {
                "accuracy": "high",
                "entity_types": entity_types,
                "return_entity": true,
            },
            "processed_text": {
                "type": "MARKER",
                "pattern": "[UNIQUE_NUMBERED_ENTITY_TYPE]",
            },
        });

        let response = ureq::post(&self.config.endpoint)
            .set("Content-Type", "application/json")
            .set("x-api-key", &self.config.api_key)
            .timeout(REQUEST_TIMEOUT)
            .send_json(payload);

        match response {
            Ok(resp) => resp
                .into_json::<Value>()
                .map_err(|e| Error::http(format!("failed to read service response: {}", e))),
            Err(ureq::Error::Status(401, _)) => {
                error!("Extraction service authentication error");
                Err(Error::Auth("HTTP 401 from extraction service".to_string()))
            }
            Err(ureq::Error::Status(403, _)) => {
                error!("Extraction service rate limited");
                Err(Error::RateLimited(
                    "HTTP 403 from extraction service".to_string(),
                ))
            }
            Err(e) => Err(Error::http(e.to_string())),
        }
    }
}

/// Fold a service response into an entity map.
///
/// The response body is a list with one element per submitted text; only the
/// first is consulted. A body without an `entities` collection yields an
/// empty map. Entities missing both a canonical key and a best label cannot
/// be identified later and are skipped with a warning; entities missing span
/// offsets keep their record but contribute no position or context.
#[must_use]
pub fn parse_entities(response: &Value, text: &str) -> EntityMap {
    let mut entities = EntityMap::new();
    let text_chars = text.chars().count();

    let Some(detected) = response
        .get(0)
        .and_then(|first| first.get("entities"))
        .and_then(Value::as_array)
    else {
        warn!("Service response carried no entities collection");
        return entities;
    };

    for entity in detected {
        let entity_key = entity
            .get("processed_text")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let entity_type = entity
            .get("best_label")
            .and_then(Value::as_str)
            .unwrap_or_default();

        if entity_key.is_empty() || entity_type.is_empty() {
            warn!("Skipping entity due to missing key or type: {}", entity);
            continue;
        }

        let record = entities
            .entry(entity_key.to_string())
            .or_insert_with(|| EntityRecord {
                text: entity
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                entity_type: entity_type.to_string(),
                positions: Vec::new(),
                sentences: Vec::new(),
            });

        let location = entity.get("location");
        let start_pos = location
            .and_then(|loc| loc.get("stt_idx"))
            .and_then(Value::as_u64);
        let end_pos = location
            .and_then(|loc| loc.get("end_idx"))
            .and_then(Value::as_u64);

        match (start_pos, end_pos) {
            (Some(start), Some(_)) => {
                let start = start as usize;
                record
                    .positions
                    .push(normalize_position(start, text_chars));
                record.sentences.push(context_window(text, start));
            }
            _ => {
                warn!(
                    "Skipping context extraction for entity due to missing position information: {}",
                    entity
                );
            }
        }
    }

    entities
}
