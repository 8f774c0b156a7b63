//! Strength and growth-area lists.
//!
//! Both lists are derived from the per-trait report. Sorting is stable, so
//! traits with equal scores keep their report order (catalog order). An empty
//! list is replaced by a fixed placeholder list. Neither list exceeds
//! [`MAX_RANKED_ENTRIES`], whatever the configuration asks for.

use crate::assessment::TraitScore;
use crate::config::{RankingConfig, MAX_RANKED_ENTRIES};
use std::cmp::Ordering;

pub const DEFAULT_STRENGTHS: [&str; 3] = [
    "Active Listening",
    "Clear Expression",
    "Empathetic Response",
];

pub const DEFAULT_GROWTH_AREAS: [&str; 3] = [
    "Conflict Resolution",
    "Tone Calibration",
    "Feedback Integration",
];

fn ranked_names<F, C>(traits: &[TraitScore], keep: F, compare: C, limit: usize) -> Vec<String>
where
    F: Fn(f64) -> bool,
    C: Fn(f64, f64) -> Ordering,
{
    let mut selected: Vec<&TraitScore> = traits.iter().filter(|t| keep(t.score)).collect();
    selected.sort_by(|a, b| compare(a.score, b.score));
    selected
        .into_iter()
        .take(limit.min(MAX_RANKED_ENTRIES))
        .map(|t| t.name.clone())
        .collect()
}

fn or_defaults(names: Vec<String>, defaults: [&str; 3]) -> Vec<String> {
    if names.is_empty() {
        defaults.iter().map(|name| name.to_string()).collect()
    } else {
        names
    }
}

/// Highest-scoring traits at or above the strength threshold.
pub fn top_strengths(traits: &[TraitScore], config: &RankingConfig) -> Vec<String> {
    let names = ranked_names(
        traits,
        |score| score >= config.strength_threshold,
        |a, b| b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        config.max_entries,
    );
    or_defaults(names, DEFAULT_STRENGTHS)
}

/// Lowest-scoring traits strictly below the growth threshold, lowest first.
pub fn growth_areas(traits: &[TraitScore], config: &RankingConfig) -> Vec<String> {
    let names = ranked_names(
        traits,
        |score| score < config.growth_threshold,
        |a, b| a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        config.max_entries,
    );
    or_defaults(names, DEFAULT_GROWTH_AREAS)
}
