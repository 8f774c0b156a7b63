//! Named communication and collaboration styles.
//!
//! Classification reads two trait averages directly, independent of the
//! category composite. A trait without responses counts as
//! [`STYLE_TRAIT_DEFAULT`], not as zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stand-in average for a style trait that has no responses.
pub const STYLE_TRAIT_DEFAULT: f64 = 50.0;

/// A trait at or above this counts as pronounced.
pub const STYLE_TRAIT_THRESHOLD: f64 = 80.0;

/// Category composite needed for the balanced/supportive style.
pub const STYLE_CATEGORY_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommunicationStyle {
    EmpathicClarifier,
    DirectCommunicator,
    ActiveListener,
    BalancedCommunicator,
    DevelopingCommunicator,
}

impl CommunicationStyle {
    pub fn classify(listening: f64, clarity: f64, communication_score: f64) -> Self {
        let listens = listening >= STYLE_TRAIT_THRESHOLD;
        let clear = clarity >= STYLE_TRAIT_THRESHOLD;
        match (listens, clear) {
            (true, true) => Self::EmpathicClarifier,
            (_, true) => Self::DirectCommunicator,
            (true, _) => Self::ActiveListener,
            _ if communication_score >= STYLE_CATEGORY_THRESHOLD => Self::BalancedCommunicator,
            _ => Self::DevelopingCommunicator,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmpathicClarifier => "Empathic Clarifier",
            Self::DirectCommunicator => "Direct Communicator",
            Self::ActiveListener => "Active Listener",
            Self::BalancedCommunicator => "Balanced Communicator",
            Self::DevelopingCommunicator => "Developing Communicator",
        }
    }
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollaborationStyle {
    AdaptiveMediator,
    ConflictNavigator,
    TeamHarmonizer,
    SupportiveCollaborator,
    EmergingTeamPlayer,
}

impl CollaborationStyle {
    pub fn classify(conflict: f64, adaptability: f64, collaboration_score: f64) -> Self {
        let mediates = conflict >= STYLE_TRAIT_THRESHOLD;
        let adapts = adaptability >= STYLE_TRAIT_THRESHOLD;
        match (mediates, adapts) {
            (true, true) => Self::AdaptiveMediator,
            (true, _) => Self::ConflictNavigator,
            (_, true) => Self::TeamHarmonizer,
            _ if collaboration_score >= STYLE_CATEGORY_THRESHOLD => Self::SupportiveCollaborator,
            _ => Self::EmergingTeamPlayer,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AdaptiveMediator => "Adaptive Mediator",
            Self::ConflictNavigator => "Conflict Navigator",
            Self::TeamHarmonizer => "Team Harmonizer",
            Self::SupportiveCollaborator => "Supportive Collaborator",
            Self::EmergingTeamPlayer => "Emerging Team Player",
        }
    }
}

impl fmt::Display for CollaborationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
