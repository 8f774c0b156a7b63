use cci_assessment::catalog::{self, validate_catalog, Category, ResponseType, COACH_TRAITS};
use cci_assessment::{normalize_answer, Answer};
use std::collections::HashSet;

#[test]
fn test_shipped_catalog_is_valid() {
    let issues = validate_catalog(catalog::all());
    assert!(issues.is_empty(), "catalog issues: {issues:?}");
}

#[test]
fn test_catalog_shape() {
    let questions = catalog::all();
    assert_eq!(questions.len(), 15);

    let counts: Vec<usize> = Category::ALL
        .iter()
        .map(|c| catalog::by_category(*c).count())
        .collect();
    assert_eq!(counts, vec![4, 4, 2, 5]);

    let ids: HashSet<_> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), questions.len());
}

#[test]
fn test_coach_questions_cover_every_dimension() {
    let coach_traits: Vec<_> = catalog::by_category(Category::Coach)
        .map(|q| q.trait_key)
        .collect();
    assert_eq!(coach_traits, COACH_TRAITS.to_vec());
}

#[test]
fn test_every_scenario_option_normalizes_to_its_score() {
    for question in catalog::all()
        .iter()
        .filter(|q| q.response_type == ResponseType::Scenario)
    {
        for option in question.options {
            let value = normalize_answer(question, &Answer::Option(option.id.to_string())).unwrap();
            assert_eq!(value, option.score, "{}/{}", question.id, option.id);
        }
    }
}

#[test]
fn test_lookup_by_id() {
    let question = catalog::find("context_group_1").unwrap();
    assert_eq!(question.category, Category::Contextual);
    assert_eq!(catalog::position("comm_clarity_1"), Some(0));
    assert!(catalog::find("missing").is_none());
}
