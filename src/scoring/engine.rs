//! Scoring engine: responses in, one immutable [`AssessmentResult`] out.
//!
//! The engine is total. Missing data is handled per field, and the three
//! conventions differ on purpose:
//!
//! - category composites fall back to `0`,
//! - COACH dimensions without data are absent from `coach_scores`,
//! - the four style traits fall back to [`STYLE_TRAIT_DEFAULT`].
//!
//! When no COACH dimension has data, the COACH term of the overall score
//! contributes `0`.

use crate::assessment::{AssessmentResult, Response, TraitScore};
use crate::catalog::{self, Category, Question};
use crate::config::ScoringConfig;
use std::collections::BTreeMap;
use tracing::debug;

use super::aggregation::{aggregate, average, Aggregates};
use super::ranking::{growth_areas, top_strengths};
use super::styles::{CollaborationStyle, CommunicationStyle, STYLE_TRAIT_DEFAULT};
use super::traits::{format_trait_name, trait_description};

/// Scores responses against a question table with a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    questions: &'static [Question],
    config: ScoringConfig,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringEngine {
    /// Engine over the shipped catalog.
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_questions(catalog::all(), config)
    }

    pub fn with_questions(questions: &'static [Question], config: ScoringConfig) -> Self {
        Self { questions, config }
    }

    pub fn score(&self, responses: &[Response]) -> AssessmentResult {
        let aggregates = aggregate(responses, self.questions);

        let communication_score = category_score(&aggregates, Category::Communication);
        let collaboration_score = category_score(&aggregates, Category::Collaboration);
        let contextual_score = category_score(&aggregates, Category::Contextual);

        let coach_scores: BTreeMap<String, f64> = aggregates
            .coach()
            .iter()
            .map(|group| (group.key.to_string(), group.average()))
            .collect();

        let overall_score = self.overall_score(
            communication_score,
            collaboration_score,
            contextual_score,
            &coach_scores,
        );

        let communication_style = CommunicationStyle::classify(
            style_trait(&aggregates, "listening"),
            style_trait(&aggregates, "clarity"),
            communication_score,
        );
        let collaboration_style = CollaborationStyle::classify(
            style_trait(&aggregates, "conflict_management"),
            style_trait(&aggregates, "team_adaptability"),
            collaboration_score,
        );

        let trait_scores = trait_report(&aggregates);
        let top_strengths = top_strengths(&trait_scores, &self.config.ranking);
        let growth_areas = growth_areas(&trait_scores, &self.config.ranking);

        debug!(
            communication_score,
            collaboration_score,
            contextual_score,
            overall_score,
            coach_dimensions = coach_scores.len(),
            traits = trait_scores.len(),
            "Computed assessment result"
        );

        AssessmentResult {
            communication_score,
            collaboration_score,
            contextual_score,
            coach_scores,
            overall_score,
            communication_style: communication_style.label().to_string(),
            collaboration_style: collaboration_style.label().to_string(),
            top_strengths,
            growth_areas,
            trait_scores,
        }
    }

    fn overall_score(
        &self,
        communication: f64,
        collaboration: f64,
        contextual: f64,
        coach_scores: &BTreeMap<String, f64>,
    ) -> f64 {
        let weights = &self.config.weights;
        let coach_values: Vec<f64> = coach_scores.values().copied().collect();
        let coach_mean = average(&coach_values).unwrap_or(0.0);

        let overall = communication * weights.communication
            + collaboration * weights.collaboration
            + contextual * weights.contextual
            + coach_mean * weights.coach;
        overall.clamp(0.0, 100.0)
    }
}

fn category_score(aggregates: &Aggregates, category: Category) -> f64 {
    aggregates.category_average(category).unwrap_or(0.0)
}

fn style_trait(aggregates: &Aggregates, key: &str) -> f64 {
    aggregates.trait_average(key).unwrap_or(STYLE_TRAIT_DEFAULT)
}

fn trait_report(aggregates: &Aggregates) -> Vec<TraitScore> {
    aggregates
        .traits()
        .iter()
        .map(|group| TraitScore {
            key: group.key.to_string(),
            name: format_trait_name(group.key),
            score: group.average(),
            description: trait_description(group.key).to_string(),
        })
        .collect()
}

/// Score responses with the default configuration.
pub fn compute_result(responses: &[Response]) -> AssessmentResult {
    ScoringEngine::default().score(responses)
}

/// Score responses with configured weights and ranking thresholds.
pub fn compute_result_with(responses: &[Response], config: &ScoringConfig) -> AssessmentResult {
    ScoringEngine::new(*config).score(responses)
}
