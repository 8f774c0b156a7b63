//! Value types crossing the engine boundary.
//!
//! A [`Response`] is one normalized answer; a [`ResponseSet`] collects them with
//! last-write-wins semantics; an [`AssessmentResult`] is the engine's single
//! output and is never mutated after construction.

mod response_set;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use response_set::ResponseSet;

/// One respondent-supplied value for one question, normalized to [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    pub value: f64,
}

impl Response {
    pub fn new(question_id: impl Into<String>, value: f64) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

/// Score and description for one trait that received at least one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitScore {
    /// Catalog trait key, e.g. `tone_awareness`
    pub key: String,
    /// Human-readable form of the key, e.g. `Tone Awareness`
    pub name: String,
    pub score: f64,
    pub description: String,
}

/// The scored profile for a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Category average, or 0 when the category has no responses
    pub communication_score: f64,
    pub collaboration_score: f64,
    pub contextual_score: f64,
    /// COACH trait key to average; traits without responses are absent
    pub coach_scores: BTreeMap<String, f64>,
    pub overall_score: f64,
    pub communication_style: String,
    pub collaboration_style: String,
    pub top_strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub trait_scores: Vec<TraitScore>,
}

impl AssessmentResult {
    pub fn trait_score(&self, key: &str) -> Option<&TraitScore> {
        self.trait_scores.iter().find(|t| t.key == key)
    }

    pub fn coach_score(&self, key: &str) -> Option<f64> {
        self.coach_scores.get(key).copied()
    }
}
