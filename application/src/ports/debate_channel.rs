//! Publish channel port
//!
//! Fire-and-forget broadcast of persisted messages to whoever is watching
//! a debate. The `publish` method is intentionally synchronous and
//! non-fallible: delivery carries no acknowledgment, and a channel problem
//! must never disrupt the orchestration flow that already persisted the
//! message.

use agora_domain::{DebateId, Message};

/// Broadcast channel keyed by debate identity
pub trait DebateChannel: Send + Sync {
    /// Broadcast a persisted message to all subscribers of the debate
    fn publish(&self, debate: &DebateId, message: &Message);
}

/// No-op implementation for tests and headless runs
pub struct NoChannel;

impl DebateChannel for NoChannel {
    fn publish(&self, _debate: &DebateId, _message: &Message) {}
}
