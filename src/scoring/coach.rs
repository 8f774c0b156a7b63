//! The five COACH dimensions as displayed in a report.
//!
//! The framework acronym repeats the letter C (Clarity and Conflict); the trait
//! keys stay distinct, so the display collision has no effect on scoring.

use crate::assessment::AssessmentResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoachDimension {
    ClarityComprehension,
    OpennessFeedback,
    AlignmentEmpathy,
    ConflictNavigation,
    HarmonyFollowThrough,
}

impl CoachDimension {
    pub const ALL: [CoachDimension; 5] = [
        CoachDimension::ClarityComprehension,
        CoachDimension::OpennessFeedback,
        CoachDimension::AlignmentEmpathy,
        CoachDimension::ConflictNavigation,
        CoachDimension::HarmonyFollowThrough,
    ];

    /// Trait key used in the catalog and in `coach_scores`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ClarityComprehension => "clarity_comprehension",
            Self::OpennessFeedback => "openness_feedback",
            Self::AlignmentEmpathy => "alignment_empathy",
            Self::ConflictNavigation => "conflict_navigation",
            Self::HarmonyFollowThrough => "harmony_followthrough",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::ClarityComprehension | Self::ConflictNavigation => "C",
            Self::OpennessFeedback => "O",
            Self::AlignmentEmpathy => "A",
            Self::HarmonyFollowThrough => "H",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ClarityComprehension => "Clarity & Comprehension",
            Self::OpennessFeedback => "Openness & Feedback",
            Self::AlignmentEmpathy => "Alignment & Empathy",
            Self::ConflictNavigation => "Conflict Navigation",
            Self::HarmonyFollowThrough => "Harmony & Follow-Through",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ClarityComprehension => "How clearly you express and understand ideas",
            Self::OpennessFeedback => "Responsiveness to input and psychological safety",
            Self::AlignmentEmpathy => "Tuning into emotional context and team goals",
            Self::ConflictNavigation => "Handling disagreements and emotional control",
            Self::HarmonyFollowThrough => "Encouraging cohesion and dependable contribution",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

/// One display row. `score` is 0 when the dimension was not measured;
/// `measured` tells the two apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachRow {
    pub dimension: CoachDimension,
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub score: f64,
    pub measured: bool,
}

pub fn coach_rows(result: &AssessmentResult) -> Vec<CoachRow> {
    CoachDimension::ALL
        .into_iter()
        .map(|dimension| {
            let score = result.coach_score(dimension.key());
            CoachRow {
                dimension,
                code: dimension.code(),
                name: dimension.name(),
                description: dimension.description(),
                score: score.unwrap_or(0.0),
                measured: score.is_some(),
            }
        })
        .collect()
}
