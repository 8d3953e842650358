//! Messages: the immutable, totally ordered debate stream

use crate::core::error::DomainError;
use crate::core::ids::{DebateId, UserId};
use crate::debate::role::RoleTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted message (Entity)
///
/// Immutable once created. Total order within a debate is by `created_at`,
/// ties broken by the store-assigned `seq` — a monotonic sequence, so two
/// messages stamped in the same instant still order by insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Store-assigned monotonic sequence, doubles as the message identity
    pub seq: u64,
    pub debate: DebateId,
    /// Sender role tag; must resolve to a roster participant or `system`
    pub sender: RoleTag,
    /// Sender identity, only meaningful when `sender` is `user`
    pub sender_user: Option<UserId>,
    pub text: String,
    /// Logical turn grouping, 1-based
    pub round: u32,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a message, validated before it reaches the store
///
/// The store assigns `seq` and `created_at`; everything else is fixed here.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub debate: DebateId,
    pub sender: RoleTag,
    pub sender_user: Option<UserId>,
    pub text: String,
    pub round: u32,
}

impl MessageDraft {
    /// Create a draft, failing fast on malformed input rather than letting
    /// a corrupted message reach the store.
    pub fn new(
        debate: DebateId,
        sender: RoleTag,
        sender_user: Option<UserId>,
        text: impl Into<String>,
        round: u32,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessageText);
        }
        if round == 0 {
            return Err(DomainError::InvalidRound);
        }
        // Sender identity only means something for the human.
        let sender_user = if sender == RoleTag::User {
            sender_user
        } else {
            None
        };
        Ok(Self {
            debate,
            sender,
            sender_user,
            text,
            round,
        })
    }

    /// A human-authored draft
    pub fn human(
        debate: DebateId,
        sender_user: Option<UserId>,
        text: impl Into<String>,
        round: u32,
    ) -> Result<Self, DomainError> {
        Self::new(debate, RoleTag::User, sender_user, text, round)
    }

    /// An automated reply draft
    pub fn reply(
        debate: DebateId,
        sender: RoleTag,
        text: impl Into<String>,
        round: u32,
    ) -> Result<Self, DomainError> {
        Self::new(debate, sender, None, text, round)
    }
}
