//! Debate domain entities

use crate::core::ids::{DebateId, TopicId, UserId};
use crate::debate::role::{RoleTag, resolve_role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebateStatus {
    Active,
    Closed,
}

/// A member of a debate's roster (Entity)
///
/// Either the human or an automated responder. The `role` tag is optional
/// on the wire; [`resolve_role`] turns every participant into exactly one
/// canonical tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Explicit role tag, when assigned
    pub role: Option<RoleTag>,
    /// Whether this participant's replies are machine-generated
    pub is_automated: bool,
    /// Human-readable name shown in transcripts and reply templates
    pub display_name: Option<String>,
    /// The position this participant argues from, free text
    pub stance: Option<String>,
    /// Back-reference to a human identity; only meaningful for the human
    pub user: Option<UserId>,
}

impl Participant {
    /// The human participant
    pub fn human(user: Option<UserId>) -> Self {
        Self {
            role: Some(RoleTag::User),
            is_automated: false,
            display_name: None,
            stance: None,
            user,
        }
    }

    /// An automated responder in the given slot
    pub fn responder(slot: u8, display_name: Option<String>, stance: Option<String>) -> Self {
        Self {
            role: Some(RoleTag::Responder(slot)),
            is_automated: true,
            display_name,
            stance,
            user: None,
        }
    }

    /// The resolved canonical role tag for this participant
    pub fn resolved_role(&self) -> RoleTag {
        resolve_role(self)
    }

    /// Name used in transcripts and the fallback reply template
    pub fn name_or_role(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => self.resolved_role().to_string(),
        }
    }
}

/// A topic-scoped conversation with a fixed roster (Aggregate Root)
///
/// Owned by the store collaborator; the core reads it and only ever touches
/// `last_updated` through the store, never directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debate {
    pub id: DebateId,
    pub topic: TopicId,
    /// Denormalized topic name, the reference text for relevance scoring
    pub topic_name: String,
    pub participants: Vec<Participant>,
    pub status: DebateStatus,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Debate {
    pub fn new(
        id: impl Into<DebateId>,
        topic: impl Into<TopicId>,
        topic_name: impl Into<String>,
        participants: Vec<Participant>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            topic: topic.into(),
            topic_name: topic_name.into(),
            participants,
            status: DebateStatus::Active,
            created_at: now,
            last_updated: now,
        }
    }

    /// All automated participants, in roster order
    pub fn automated_participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_automated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_automated_participants_filter() {
        let debate = Debate::new(
            "d1",
            "t1",
            "Climate Change",
            vec![
                Participant::human(Some(UserId::new("u1"))),
                Participant::responder(1, Some("AI Alpha".to_string()), None),
                Participant::responder(2, Some("AI Beta".to_string()), None),
            ],
        );
        let roles: Vec<_> = debate
            .automated_participants()
            .map(|p| p.resolved_role().to_string())
            .collect();
        assert_eq!(roles, vec!["ai1", "ai2"]);
    }

    #[test]
    fn test_name_or_role_falls_back_to_tag() {
        let anonymous = Participant::responder(2, None, None);
        assert_eq!(anonymous.name_or_role(), "ai2");

        let named = Participant::responder(1, Some("AI Alpha".to_string()), None);
        assert_eq!(named.name_or_role(), "AI Alpha");
    }
}
