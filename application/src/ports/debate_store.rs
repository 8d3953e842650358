//! Debate store port
//!
//! Defines how the core reads debates and appends messages. Persistence
//! schema and storage mechanics belong to the adapter; the core only
//! relies on the ordering contracts documented per method.

use agora_domain::{Debate, DebateId, Message, MessageDraft};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Debate not found: {0}")]
    DebateNotFound(DebateId),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Store for debates and their message streams
///
/// Implementations (adapters) live in the infrastructure layer. The store
/// owns message identity: it assigns each created message its monotonic
/// sequence number and creation timestamp, which together define the total
/// order of a debate's stream.
#[async_trait]
pub trait DebateStore: Send + Sync {
    /// Look up a debate by id; `Ok(None)` when it does not exist
    async fn debate(&self, id: &DebateId) -> Result<Option<Debate>, StoreError>;

    /// The last `limit` messages of a debate, **newest first**
    async fn recent_messages(
        &self,
        id: &DebateId,
        limit: usize,
    ) -> Result<Vec<Message>, StoreError>;

    /// The full message history of a debate, **oldest first**, as one
    /// consistent snapshot
    async fn all_messages(&self, id: &DebateId) -> Result<Vec<Message>, StoreError>;

    /// Persist a new message, stamping sequence and timestamp
    async fn create_message(&self, draft: MessageDraft) -> Result<Message, StoreError>;

    /// Touch the debate's `last_updated` timestamp
    async fn touch_debate(&self, id: &DebateId) -> Result<(), StoreError>;
}
