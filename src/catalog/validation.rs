//! Authoring-time catalog checks.
//!
//! Catalog defects (duplicate ids, scenario items without options, and so on)
//! are not recoverable at runtime. These checks collect every issue instead of
//! failing at the first one so a single test run reports the whole picture.

use super::{Category, Question, ResponseType, COACH_TRAITS};
use std::collections::HashSet;
use std::fmt;

/// A single defect found in a question table.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIssue {
    DuplicateQuestionId(String),
    MissingOptions { question_id: String },
    OptionScoreOutOfRange { question_id: String, option_id: String, score: f64 },
    DuplicateOptionId { question_id: String, option_id: String },
    UnexpectedOptions { question_id: String },
    ZeroScale { question_id: String },
    EmptyCategory(Category),
    MissingCoachTrait(&'static str),
    UnknownCoachTrait { question_id: String, trait_key: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateQuestionId(id) => write!(f, "duplicate question id '{id}'"),
            CatalogIssue::MissingOptions { question_id } => {
                write!(f, "scenario question '{question_id}' has no options")
            }
            CatalogIssue::OptionScoreOutOfRange {
                question_id,
                option_id,
                score,
            } => write!(
                f,
                "option '{option_id}' of '{question_id}' scores {score}, outside [0, 100]"
            ),
            CatalogIssue::DuplicateOptionId {
                question_id,
                option_id,
            } => write!(f, "question '{question_id}' repeats option id '{option_id}'"),
            CatalogIssue::UnexpectedOptions { question_id } => {
                write!(f, "non-scenario question '{question_id}' carries options")
            }
            CatalogIssue::ZeroScale { question_id } => {
                write!(f, "question '{question_id}' declares a scale of 0")
            }
            CatalogIssue::EmptyCategory(category) => {
                write!(f, "category '{category}' has no questions")
            }
            CatalogIssue::MissingCoachTrait(trait_key) => {
                write!(f, "COACH trait '{trait_key}' has no coach question")
            }
            CatalogIssue::UnknownCoachTrait {
                question_id,
                trait_key,
            } => write!(
                f,
                "coach question '{question_id}' measures non-COACH trait '{trait_key}'"
            ),
        }
    }
}

/// Check a question table, returning every issue found.
pub fn validate_catalog(questions: &[Question]) -> Vec<CatalogIssue> {
    let mut issues = duplicate_ids(questions);
    issues.extend(questions.iter().flat_map(question_issues));
    issues.extend(coverage_issues(questions));
    issues
}

fn duplicate_ids(questions: &[Question]) -> Vec<CatalogIssue> {
    let mut seen = HashSet::new();
    questions
        .iter()
        .filter(|q| !seen.insert(q.id))
        .map(|q| CatalogIssue::DuplicateQuestionId(q.id.to_string()))
        .collect()
}

fn question_issues(question: &Question) -> Vec<CatalogIssue> {
    let question_id = question.id.to_string();
    let mut issues = Vec::new();

    match question.response_type {
        ResponseType::Scenario if question.options.is_empty() => {
            issues.push(CatalogIssue::MissingOptions {
                question_id: question_id.clone(),
            });
        }
        ResponseType::Scenario => {}
        _ if !question.options.is_empty() => {
            issues.push(CatalogIssue::UnexpectedOptions {
                question_id: question_id.clone(),
            });
        }
        _ => {}
    }

    let mut option_ids = HashSet::new();
    for option in question.options {
        if !(0.0..=100.0).contains(&option.score) {
            issues.push(CatalogIssue::OptionScoreOutOfRange {
                question_id: question_id.clone(),
                option_id: option.id.to_string(),
                score: option.score,
            });
        }
        if !option_ids.insert(option.id) {
            issues.push(CatalogIssue::DuplicateOptionId {
                question_id: question_id.clone(),
                option_id: option.id.to_string(),
            });
        }
    }

    if question.scale == Some(0) {
        issues.push(CatalogIssue::ZeroScale {
            question_id: question_id.clone(),
        });
    }

    if question.is_coach() && !super::is_coach_trait(question.trait_key) {
        issues.push(CatalogIssue::UnknownCoachTrait {
            question_id,
            trait_key: question.trait_key.to_string(),
        });
    }

    issues
}

fn coverage_issues(questions: &[Question]) -> Vec<CatalogIssue> {
    let empty_categories = Category::ALL
        .into_iter()
        .filter(|category| !questions.iter().any(|q| q.category == *category))
        .map(CatalogIssue::EmptyCategory);

    let missing_traits = COACH_TRAITS
        .into_iter()
        .filter(|trait_key| {
            !questions
                .iter()
                .any(|q| q.is_coach() && q.trait_key == *trait_key)
        })
        .map(CatalogIssue::MissingCoachTrait);

    empty_categories.chain(missing_traits).collect()
}
