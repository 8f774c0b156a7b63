//! Question catalog for the CCI assessment.
//!
//! The catalog is a process-wide, immutable table. Both the scoring engine and
//! any rendering front end read it; nothing mutates it after startup, so no
//! synchronization is required.
//!
//! ```rust
//! use cci_assessment::catalog::{self, Category};
//!
//! let question = catalog::find("comm_clarity_1").unwrap();
//! assert_eq!(question.category, Category::Communication);
//! assert_eq!(question.trait_key, "clarity");
//! ```

pub mod questions;
pub mod validation;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub use questions::QUESTIONS;
pub use validation::{validate_catalog, CatalogIssue};

/// Default number of positions on a likert item.
pub const DEFAULT_LIKERT_SCALE: u32 = 5;

/// Default maximum raw value on a slider or agreement item.
pub const DEFAULT_SLIDER_SCALE: u32 = 100;

/// The five COACH trait keys, in framework order.
pub const COACH_TRAITS: [&str; 5] = [
    "clarity_comprehension",
    "openness_feedback",
    "alignment_empathy",
    "conflict_navigation",
    "harmony_followthrough",
];

/// Coarse question grouping used for composite scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Communication,
    Collaboration,
    Contextual,
    Coach,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Communication,
        Category::Collaboration,
        Category::Contextual,
        Category::Coach,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Communication => "communication",
            Category::Collaboration => "collaboration",
            Category::Contextual => "contextual",
            Category::Coach => "coach",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "communication" => Some(Self::Communication),
            "collaboration" => Some(Self::Collaboration),
            "contextual" => Some(Self::Contextual),
            "coach" => Some(Self::Coach),
            _ => None,
        }
    }

    /// Section label shown to respondents
    pub fn label(&self) -> &'static str {
        match self {
            Category::Communication => "Communication",
            Category::Collaboration => "Collaboration",
            Category::Contextual => "Contextual",
            Category::Coach => "Coach",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Multiple choice with pre-authored option scores
    Scenario,
    /// Discrete 1..=scale agreement positions
    Likert,
    /// Continuous 0..=scale value
    Slider,
    /// Continuous agreement, rendered like a slider
    Agreement,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Scenario => "scenario",
            ResponseType::Likert => "likert",
            ResponseType::Slider => "slider",
            ResponseType::Agreement => "agreement",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable answer of a scenario item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuestionOption {
    pub id: &'static str,
    pub text: &'static str,
    /// Pre-authored point value in [0, 100]
    pub score: f64,
}

/// A catalog entry. Authored once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    pub response_type: ResponseType,
    pub category: Category,
    #[serde(rename = "trait")]
    pub trait_key: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<&'static str>,
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [QuestionOption],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_label: Option<&'static str>,
}

impl Question {
    /// Scale with the per-type default applied.
    pub fn effective_scale(&self) -> u32 {
        match (self.scale, self.response_type) {
            (Some(scale), _) => scale,
            (None, ResponseType::Likert) => DEFAULT_LIKERT_SCALE,
            (None, _) => DEFAULT_SLIDER_SCALE,
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    pub fn is_coach(&self) -> bool {
        self.category == Category::Coach
    }
}

fn has_no_options(options: &&'static [QuestionOption]) -> bool {
    options.is_empty()
}

static INDEX: Lazy<HashMap<&'static str, &'static Question>> =
    Lazy::new(|| QUESTIONS.iter().map(|q| (q.id, q)).collect());

/// All questions in presentation order.
pub fn all() -> &'static [Question] {
    QUESTIONS
}

/// Look up a question by id.
pub fn find(id: &str) -> Option<&'static Question> {
    INDEX.get(id).copied()
}

/// Position of a question in presentation order.
pub fn position(id: &str) -> Option<usize> {
    QUESTIONS.iter().position(|q| q.id == id)
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.category == category)
}

pub fn is_coach_trait(trait_key: &str) -> bool {
    COACH_TRAITS.iter().any(|key| *key == trait_key)
}
