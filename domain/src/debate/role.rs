//! Role tags and the role-resolution decision function
//!
//! The canonical role-tag set is `user`, `ai1`..`ai9` and `system`. A role
//! tag is the join key between a [`Participant`](super::entities::Participant)
//! and the messages it authored, so tags must be unique within a debate.

use crate::core::error::DomainError;
use crate::debate::entities::Participant;
use serde::{Deserialize, Serialize, de};

/// Role of a participant within a debate (Value Object)
///
/// Serializes to the wire strings `"user"`, `"ai1"`, `"ai2"`, ... and
/// `"system"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleTag {
    /// The human participant
    User,
    /// An automated responder, identified by its 1-based slot
    Responder(u8),
    /// System notices (never a participant's role unless explicitly assigned)
    System,
}

impl RoleTag {
    /// Create a responder tag, validating the slot range (1..=9)
    pub fn responder(slot: u8) -> Result<Self, DomainError> {
        if (1..=9).contains(&slot) {
            Ok(RoleTag::Responder(slot))
        } else {
            Err(DomainError::InvalidResponderSlot(slot))
        }
    }

    /// Whether this tag denotes an automated responder
    pub fn is_responder(&self) -> bool {
        matches!(self, RoleTag::Responder(_))
    }

    /// Whether this tag denotes the human participant
    pub fn is_user(&self) -> bool {
        matches!(self, RoleTag::User)
    }
}

impl std::fmt::Display for RoleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleTag::User => write!(f, "user"),
            RoleTag::Responder(slot) => write!(f, "ai{}", slot),
            RoleTag::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for RoleTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(RoleTag::User),
            "system" => Ok(RoleTag::System),
            other => {
                if let Some(digits) = other.strip_prefix("ai")
                    && let Ok(slot) = digits.parse::<u8>()
                {
                    return RoleTag::responder(slot)
                        .map_err(|_| DomainError::InvalidRoleTag(other.to_string()));
                }
                Err(DomainError::InvalidRoleTag(other.to_string()))
            }
        }
    }
}

impl Serialize for RoleTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RoleTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Resolve a participant's role tag through the ordered fallback chain:
///
/// 1. the explicit tag, when present;
/// 2. for automated participants, a case-insensitive `"ai"` marker in the
///    display name, optionally followed by a slot digit (`"AI 2"` → `ai2`);
/// 3. the first automated slot (`ai1`) for automated participants, `user`
///    for humans.
///
/// This is a total decision function, not an error path: every participant
/// resolves to exactly one tag.
pub fn resolve_role(participant: &Participant) -> RoleTag {
    if let Some(tag) = &participant.role {
        return tag.clone();
    }
    if !participant.is_automated {
        return RoleTag::User;
    }
    if let Some(name) = &participant.display_name
        && let Some(slot) = slot_from_display_name(name)
    {
        return RoleTag::Responder(slot);
    }
    RoleTag::Responder(1)
}

/// Look for the `"ai"` marker in a display name and pull the first slot
/// digit that follows it, if any. `"AI Beta 2"` → `Some(2)`, `"AI"` →
/// `Some(1)`, `"Moderator"` → `None`.
fn slot_from_display_name(name: &str) -> Option<u8> {
    let lowered = name.to_lowercase();
    let marker = lowered.find("ai")?;
    let slot = lowered[marker + 2..]
        .chars()
        .find(|c| c.is_ascii_digit())
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
        .filter(|d| (1..=9).contains(d))
        .unwrap_or(1);
    Some(slot)
}
