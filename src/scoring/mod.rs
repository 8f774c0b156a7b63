pub mod aggregation;
pub mod bands;
pub mod coach;
pub mod engine;
pub mod ranking;
pub mod styles;
pub mod traits;

pub use bands::{Recommendation, ScoreBand};
pub use coach::{coach_rows, CoachDimension, CoachRow};
pub use engine::{compute_result, compute_result_with, ScoringEngine};
pub use ranking::{growth_areas, top_strengths, DEFAULT_GROWTH_AREAS, DEFAULT_STRENGTHS};
pub use styles::{CollaborationStyle, CommunicationStyle};
pub use traits::{format_trait_name, trait_description};
