//! Debate aggregate: entities, messages and role tags

pub mod entities;
pub mod message;
pub mod role;
