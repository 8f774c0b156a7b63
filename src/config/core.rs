use serde::{Deserialize, Serialize};

use super::scoring::ScoringConfig;

/// Root configuration structure, read from `.cci.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CciConfig {
    /// Composite weights and ranking thresholds
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Output defaults for the `score` command
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// One of `terminal`, `markdown`, `json`
    #[serde(default)]
    pub default_format: Option<String>,

    /// ASCII-only, uncolored terminal output
    #[serde(default)]
    pub plain: bool,
}

/// Contents written by `cci init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# CCI assessment configuration

[scoring.weights]
communication = 0.35
collaboration = 0.35
contextual = 0.15
coach = 0.15

[scoring.ranking]
strength_threshold = 75.0
growth_threshold = 70.0
max_entries = 3

[output]
default_format = "terminal"
plain = false
"#;
