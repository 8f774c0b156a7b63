//! CLI command implementations.
//!
//! - **score**: Score a response file and render the profile
//! - **questions**: List catalog questions
//! - **validate-catalog**: Check the catalog for authoring defects
//! - **init**: Write a default `.cci.toml`

pub mod init;
pub mod questions;
pub mod score;
pub mod validate_catalog;

pub use init::{init_config, init_config_at};
pub use questions::{list_questions, QuestionsConfig};
pub use score::{handle_score, ScoreConfig};
pub use validate_catalog::validate_catalog_command;
