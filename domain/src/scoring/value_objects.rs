//! Score value objects
//!
//! Sub-score bounds are part of the contract: relevance 0-35, strength
//! 0-40, engagement 0-25, total 0-100. A [`ScoreSummary`] is an immutable
//! snapshot; re-scoring produces a new one, never an in-place update.

use crate::core::ids::DebateId;
use crate::debate::role::RoleTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-participant score breakdown (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub role: RoleTag,
    /// Topic overlap, 0-35
    pub relevance: u8,
    /// Argument quality, 0-40
    pub strength: u8,
    /// Contribution frequency and concision, 0-25
    pub engagement: u8,
    /// Always `relevance + strength + engagement`
    pub total: u8,
}

impl ScoreEntry {
    pub fn new(role: RoleTag, relevance: u8, strength: u8, engagement: u8) -> Self {
        Self {
            role,
            relevance,
            strength,
            engagement,
            total: relevance + strength + engagement,
        }
    }

    /// The all-zero entry for a participant with no messages
    pub fn silent(role: RoleTag) -> Self {
        Self::new(role, 0, 0, 0)
    }
}

/// Rounded means of each sub-score across all participants (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAverages {
    pub relevance: u8,
    pub strength: u8,
    pub engagement: u8,
    pub total: u8,
}

/// The pure scoring output: one entry per participant plus the aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub breakdown: Vec<ScoreEntry>,
    pub averages: ScoreAverages,
}

/// An immutable point-in-time scoring snapshot of one debate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub debate: DebateId,
    pub breakdown: Vec<ScoreEntry>,
    pub averages: ScoreAverages,
    /// Topic name the relevance scores were computed against
    pub topic_name: String,
    /// How many messages the snapshot covered
    pub message_count: usize,
    pub scored_at: DateTime<Utc>,
}

impl ScoreSummary {
    pub fn new(
        debate: DebateId,
        scorecard: Scorecard,
        topic_name: impl Into<String>,
        message_count: usize,
        scored_at: DateTime<Utc>,
    ) -> Self {
        Self {
            debate,
            breakdown: scorecard.breakdown,
            averages: scorecard.averages,
            topic_name: topic_name.into(),
            message_count,
            scored_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum() {
        let entry = ScoreEntry::new(RoleTag::User, 30, 25, 20);
        assert_eq!(entry.total, 75);
    }

    #[test]
    fn test_silent_entry_is_all_zero() {
        let entry = ScoreEntry::silent(RoleTag::Responder(1));
        assert_eq!((entry.relevance, entry.strength, entry.engagement, entry.total), (0, 0, 0, 0));
    }
}
