//! Scoring engine for the Collaboration & Communication Intelligence (CCI)
//! assessment.
//!
//! The core is a pure function, [`compute_result`], mapping question responses
//! to an [`AssessmentResult`]: category scores, COACH dimension scores, an
//! overall composite, style labels, and ranked strengths and growth areas.
//!
//! ```rust
//! use cci_assessment::{compute_result, Response};
//!
//! let result = compute_result(&[
//!     Response::new("comm_clarity_1", 100.0),
//!     Response::new("comm_listening_1", 100.0),
//! ]);
//! assert_eq!(result.communication_style, "Empathic Clarifier");
//! assert_eq!(result.communication_score, 100.0);
//! ```

pub mod assessment;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod output;
pub mod responses;
pub mod scoring;

// Re-export commonly used types
pub use crate::assessment::{AssessmentResult, Response, ResponseSet, TraitScore};
pub use crate::catalog::{Category, Question, QuestionOption, ResponseType};
pub use crate::config::{CciConfig, RankingConfig, ScoringConfig, ScoringWeights};
pub use crate::errors::AssessmentError;
pub use crate::responses::{load_responses, normalize_answer, Answer, ResponseEntry};
pub use crate::scoring::{
    coach_rows, compute_result, compute_result_with, CoachDimension, Recommendation, ScoreBand,
    ScoringEngine,
};
