//! Join responses to the catalog and group their values.
//!
//! Responses are canonicalized before grouping: the last value per question id
//! wins, non-finite values are dropped, finite values are clamped into
//! [0, 100], and values are visited in catalog order. The grouping is therefore
//! independent of the order responses arrived in.

use crate::assessment::Response;
use crate::catalog::{Category, Question};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Values collected for one trait, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitGroup {
    pub key: &'static str,
    pub values: Vec<f64>,
}

impl TraitGroup {
    pub fn average(&self) -> f64 {
        // Groups only exist once a value has been pushed
        average(&self.values).unwrap_or_default()
    }
}

/// Response values partitioned by trait, by category, and by COACH trait.
///
/// A trait or category without responses has no entry at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    traits: Vec<TraitGroup>,
    categories: BTreeMap<Category, Vec<f64>>,
    coach: Vec<TraitGroup>,
}

impl Aggregates {
    /// Trait groups in order of first appearance in the catalog.
    pub fn traits(&self) -> &[TraitGroup] {
        &self.traits
    }

    /// Groups for coach-category questions only.
    pub fn coach(&self) -> &[TraitGroup] {
        &self.coach
    }

    pub fn trait_average(&self, key: &str) -> Option<f64> {
        self.traits
            .iter()
            .find(|group| group.key == key)
            .map(TraitGroup::average)
    }

    pub fn category_average(&self, category: Category) -> Option<f64> {
        self.categories
            .get(&category)
            .and_then(|values| average(values))
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Reduce responses to one value per question id, the latest one winning.
fn latest_values(responses: &[Response]) -> HashMap<&str, f64> {
    responses
        .iter()
        .map(|r| (r.question_id.as_str(), r.value))
        .collect()
}

fn push_to_group(groups: &mut Vec<TraitGroup>, key: &'static str, value: f64) {
    match groups.iter_mut().find(|group| group.key == key) {
        Some(group) => group.values.push(value),
        None => groups.push(TraitGroup {
            key,
            values: vec![value],
        }),
    }
}

/// Group responses against a question table.
pub fn aggregate(responses: &[Response], questions: &'static [Question]) -> Aggregates {
    let latest = latest_values(responses);

    for id in latest.keys() {
        if !questions.iter().any(|q| q.id == *id) {
            debug!(question_id = %id, "Dropping response with no matching question");
        }
    }

    let mut aggregates = Aggregates::default();
    for question in questions {
        let Some(&raw) = latest.get(question.id) else {
            continue;
        };
        if !raw.is_finite() {
            debug!(question_id = question.id, "Dropping non-finite response value");
            continue;
        }
        let value = raw.clamp(0.0, 100.0);

        push_to_group(&mut aggregates.traits, question.trait_key, value);
        aggregates
            .categories
            .entry(question.category)
            .or_default()
            .push(value);
        if question.is_coach() {
            push_to_group(&mut aggregates.coach, question.trait_key, value);
        }
    }

    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QUESTIONS;

    fn responses(pairs: &[(&str, f64)]) -> Vec<Response> {
        pairs.iter().map(|(id, v)| Response::new(*id, *v)).collect()
    }

    #[test]
    fn test_average_of_empty_is_none() {
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[40.0, 80.0]), Some(60.0));
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let aggregates = aggregate(&responses(&[("nope", 90.0)]), QUESTIONS);
        assert!(aggregates.is_empty());
        assert_eq!(aggregates.category_average(Category::Communication), None);
    }

    #[test]
    fn test_groups_by_trait_category_and_coach() {
        let aggregates = aggregate(
            &responses(&[
                ("comm_clarity_1", 100.0),
                ("comm_tone_1", 60.0),
                ("coach_openness_1", 80.0),
            ]),
            QUESTIONS,
        );

        assert_eq!(aggregates.trait_average("clarity"), Some(100.0));
        assert_eq!(aggregates.trait_average("listening"), None);
        assert_eq!(aggregates.category_average(Category::Communication), Some(80.0));
        assert_eq!(aggregates.category_average(Category::Coach), Some(80.0));
        assert_eq!(aggregates.category_average(Category::Contextual), None);

        let coach_keys: Vec<_> = aggregates.coach().iter().map(|g| g.key).collect();
        assert_eq!(coach_keys, vec!["openness_feedback"]);
    }

    #[test]
    fn test_trait_order_follows_catalog_not_arrival() {
        let aggregates = aggregate(
            &responses(&[("context_group_1", 10.0), ("comm_clarity_1", 10.0)]),
            QUESTIONS,
        );
        let keys: Vec<_> = aggregates.traits().iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["clarity", "group_dynamics"]);
    }

    #[test]
    fn test_last_value_wins_before_sanitizing() {
        let aggregates = aggregate(
            &responses(&[("comm_tone_1", 40.0), ("comm_tone_1", f64::NAN)]),
            QUESTIONS,
        );
        assert_eq!(aggregates.trait_average("tone_awareness"), None);

        let aggregates = aggregate(
            &responses(&[("comm_tone_1", f64::NAN), ("comm_tone_1", 40.0)]),
            QUESTIONS,
        );
        assert_eq!(aggregates.trait_average("tone_awareness"), Some(40.0));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let aggregates = aggregate(
            &responses(&[("comm_tone_1", 140.0), ("comm_feedback_1", -5.0)]),
            QUESTIONS,
        );
        assert_eq!(aggregates.trait_average("tone_awareness"), Some(100.0));
        assert_eq!(aggregates.trait_average("feedback_handling"), Some(0.0));
    }
}
