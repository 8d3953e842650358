//! Domain layer for agora
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! A debate is a topic-scoped conversation with a fixed participant roster:
//! one human and zero or more automated responders. Messages are immutable
//! and totally ordered by creation time, ties broken by a store-assigned
//! sequence number.
//!
//! ## Scoring
//!
//! The scoring engine is a pure function over a debate's full message
//! history. It produces transparent, heuristic per-participant scores
//! (relevance / strength / engagement) — token-level analysis only, no
//! language understanding.

pub mod core;
pub mod debate;
pub mod lexical;
pub mod reply;
pub mod scoring;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    ids::{DebateId, TopicId, UserId},
};
pub use debate::{
    entities::{Debate, DebateStatus, Participant},
    message::{Message, MessageDraft},
    role::{RoleTag, resolve_role},
};
pub use lexical::{CONNECTOR_WORDS, EVIDENCE_WORDS, tokenize};
pub use reply::fallback_reply;
pub use scoring::{
    engine::score,
    value_objects::{ScoreAverages, ScoreEntry, ScoreSummary, Scorecard},
};
