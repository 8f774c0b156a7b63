//! `.cci.toml` configuration.
//!
//! Missing files and missing sections fall back to defaults that reproduce
//! the published scoring rules exactly.

mod core;
mod loader;
mod scoring;

pub use self::core::{CciConfig, OutputConfig, DEFAULT_CONFIG_TOML};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use scoring::{
    default_coach_weight, default_collaboration_weight, default_communication_weight,
    default_contextual_weight, default_growth_threshold, default_max_entries,
    default_strength_threshold, RankingConfig, ScoringConfig, ScoringWeights, MAX_RANKED_ENTRIES,
};
