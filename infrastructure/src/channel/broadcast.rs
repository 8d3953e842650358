//! Broadcast publish channel
//!
//! One `tokio::sync::broadcast` channel per debate, created lazily on
//! first subscribe or publish. Publishing is fire-and-forget: with no
//! live subscribers the message is simply dropped, and slow subscribers
//! that overflow the channel capacity miss messages rather than block
//! the publisher.

use agora_application::ports::debate_channel::DebateChannel;
use agora_domain::{DebateId, Message};
use std::collections::HashMap;
use std::sync::RwLock;
use tokio::sync::broadcast;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 64;

/// Per-debate broadcast implementation of [`DebateChannel`]
pub struct BroadcastChannel {
    capacity: usize,
    senders: RwLock<HashMap<DebateId, broadcast::Sender<Message>>>,
}

impl BroadcastChannel {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            senders: RwLock::new(HashMap::new()),
        }
    }

    /// Subscribe to a debate's message stream. Subscribers receive every
    /// message published after this call, in publish order.
    pub fn subscribe(&self, debate: &DebateId) -> broadcast::Receiver<Message> {
        let mut senders = self
            .senders
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        senders
            .entry(debate.clone())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }
}

impl Default for BroadcastChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateChannel for BroadcastChannel {
    fn publish(&self, debate: &DebateId, message: &Message) {
        let senders = match self.senders.read() {
            Ok(senders) => senders,
            Err(poisoned) => poisoned.into_inner(),
        };
        match senders.get(debate) {
            Some(sender) => {
                if sender.send(message.clone()).is_err() {
                    debug!(debate = %debate, "No live subscribers, message dropped");
                }
            }
            None => {
                debug!(debate = %debate, "No channel for debate, message dropped");
            }
        }
    }
}
