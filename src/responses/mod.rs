//! Input boundary: raw answers and response files.

mod normalize;

use crate::assessment::{Response, ResponseSet};
use crate::catalog;
use crate::errors::{AssessmentError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub use normalize::{normalize_answer, Answer};

/// One entry of a response file: either an already-normalized value or a raw
/// answer that still needs normalizing against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseEntry {
    #[serde(rename_all = "camelCase")]
    Scored { question_id: String, value: f64 },
    #[serde(rename_all = "camelCase")]
    Answered { question_id: String, answer: Answer },
}

impl ResponseEntry {
    pub fn question_id(&self) -> &str {
        match self {
            ResponseEntry::Scored { question_id, .. }
            | ResponseEntry::Answered { question_id, .. } => question_id,
        }
    }
}

/// Turn entries into responses in arrival order.
///
/// Scored entries pass through untouched; the engine drops ids it cannot
/// match. Answered entries for unknown questions are skipped with a warning.
pub fn resolve_entries(entries: Vec<ResponseEntry>) -> Result<Vec<Response>> {
    let mut responses = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            ResponseEntry::Scored { question_id, value } => {
                responses.push(Response::new(question_id, value));
            }
            ResponseEntry::Answered {
                question_id,
                answer,
            } => {
                let Some(question) = catalog::find(&question_id) else {
                    warn!(question_id = %question_id, "Skipping answer for unknown question");
                    continue;
                };
                let value = normalize_answer(question, &answer)?;
                responses.push(Response::new(question_id, value));
            }
        }
    }
    Ok(responses)
}

/// Parse the JSON array form of a response file.
pub fn parse_responses(contents: &str, source: &Path) -> Result<Vec<Response>> {
    let entries: Vec<ResponseEntry> =
        serde_json::from_str(contents).map_err(|e| AssessmentError::parse(source, e))?;
    debug!(entries = entries.len(), path = %source.display(), "Parsed response file");
    resolve_entries(entries)
}

pub fn load_responses(path: &Path) -> Result<Vec<Response>> {
    let contents = fs::read_to_string(path).map_err(|e| AssessmentError::io(path, e))?;
    parse_responses(&contents, path)
}

/// Load a response file into a [`ResponseSet`], collapsing repeated answers.
pub fn load_response_set(path: &Path) -> Result<ResponseSet> {
    Ok(load_responses(path)?.into_iter().collect())
}
