//! Scoring configuration: composite weights and strength/growth ranking.

use serde::{Deserialize, Serialize};

/// Weights of the overall composite (each 0.0-1.0, summing to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_communication_weight")]
    pub communication: f64,

    #[serde(default = "default_collaboration_weight")]
    pub collaboration: f64,

    #[serde(default = "default_contextual_weight")]
    pub contextual: f64,

    /// Applied to the mean of the COACH dimension scores
    #[serde(default = "default_coach_weight")]
    pub coach: f64,
}

pub fn default_communication_weight() -> f64 {
    0.35
}

pub fn default_collaboration_weight() -> f64 {
    0.35
}

pub fn default_contextual_weight() -> f64 {
    0.15
}

pub fn default_coach_weight() -> f64 {
    0.15
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            communication: default_communication_weight(),
            collaboration: default_collaboration_weight(),
            contextual: default_contextual_weight(),
            coach: default_coach_weight(),
        }
    }
}

impl ScoringWeights {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    fn sum(&self) -> f64 {
        self.communication + self.collaboration + self.contextual + self.coach
    }

    pub fn collect_weight_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_weight(self.communication, "Communication"),
            Self::validate_weight(self.collaboration, "Collaboration"),
            Self::validate_weight(self.contextual, "Contextual"),
            Self::validate_weight(self.coach, "Coach"),
        ]
    }

    /// Every weight in range and at least one non-zero.
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }
        if self.sum() <= 0.0 {
            return Err("At least one scoring weight must be non-zero".to_string());
        }
        Ok(())
    }

    /// Rescale so the weights sum to exactly 1.0
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.communication /= sum;
            self.collaboration /= sum;
            self.contextual /= sum;
            self.coach /= sum;
        }
    }
}

/// Thresholds for the strength and growth-area lists
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Traits averaging at or above this are strengths
    #[serde(default = "default_strength_threshold")]
    pub strength_threshold: f64,

    /// Traits averaging strictly below this are growth areas
    #[serde(default = "default_growth_threshold")]
    pub growth_threshold: f64,

    /// Maximum names in each list
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

pub fn default_strength_threshold() -> f64 {
    75.0
}

pub fn default_growth_threshold() -> f64 {
    70.0
}

/// Upper bound for each ranked list.
pub const MAX_RANKED_ENTRIES: usize = 3;

pub fn default_max_entries() -> usize {
    MAX_RANKED_ENTRIES
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            strength_threshold: default_strength_threshold(),
            growth_threshold: default_growth_threshold(),
            max_entries: default_max_entries(),
        }
    }
}

impl RankingConfig {
    /// Thresholds must keep the two lists disjoint.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("strength_threshold", self.strength_threshold),
            ("growth_threshold", self.growth_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("{} must be between 0 and 100", name));
            }
        }
        if self.growth_threshold > self.strength_threshold {
            return Err(format!(
                "growth_threshold ({}) must not exceed strength_threshold ({})",
                self.growth_threshold, self.strength_threshold
            ));
        }
        if !(1..=MAX_RANKED_ENTRIES).contains(&self.max_entries) {
            return Err(format!(
                "max_entries must be between 1 and {}",
                MAX_RANKED_ENTRIES
            ));
        }
        Ok(())
    }
}

/// Everything the engine can be tuned with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: ScoringWeights,

    #[serde(default)]
    pub ranking: RankingConfig,
}
