//! In-memory debate store
//!
//! Backs the CLI and tests. A single writer lock guards debates and
//! message streams together, and one global monotonic sequence stamps
//! every message — so even messages created in the same instant have a
//! well-defined order.

use agora_application::ports::debate_store::{DebateStore, StoreError};
use agora_domain::{Debate, DebateId, Message, MessageDraft};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    debates: HashMap<DebateId, Debate>,
    /// Message streams, oldest first (append-only)
    messages: HashMap<DebateId, Vec<Message>>,
    seq: u64,
}

/// Thread-safe in-memory implementation of [`DebateStore`]
#[derive(Default)]
pub struct MemoryDebateStore {
    inner: RwLock<Inner>,
}

impl MemoryDebateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a debate into the store (not part of the core's port; the core
    /// never creates debates, only reads them).
    pub async fn insert_debate(&self, debate: Debate) {
        let mut inner = self.inner.write().await;
        inner.messages.entry(debate.id.clone()).or_default();
        inner.debates.insert(debate.id.clone(), debate);
    }
}

#[async_trait]
impl DebateStore for MemoryDebateStore {
    async fn debate(&self, id: &DebateId) -> Result<Option<Debate>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.debates.get(id).cloned())
    }

    async fn recent_messages(
        &self,
        id: &DebateId,
        limit: usize,
    ) -> Result<Vec<Message>, StoreError> {
        let inner = self.inner.read().await;
        let stream = inner
            .messages
            .get(id)
            .ok_or_else(|| StoreError::DebateNotFound(id.clone()))?;
        Ok(stream.iter().rev().take(limit).cloned().collect())
    }

    async fn all_messages(&self, id: &DebateId) -> Result<Vec<Message>, StoreError> {
        let inner = self.inner.read().await;
        let stream = inner
            .messages
            .get(id)
            .ok_or_else(|| StoreError::DebateNotFound(id.clone()))?;
        Ok(stream.clone())
    }

    async fn create_message(&self, draft: MessageDraft) -> Result<Message, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.debates.contains_key(&draft.debate) {
            return Err(StoreError::DebateNotFound(draft.debate));
        }
        inner.seq += 1;
        let message = Message {
            seq: inner.seq,
            debate: draft.debate.clone(),
            sender: draft.sender,
            sender_user: draft.sender_user,
            text: draft.text,
            round: draft.round,
            created_at: Utc::now(),
        };
        inner
            .messages
            .entry(draft.debate)
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    async fn touch_debate(&self, id: &DebateId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let debate = inner
            .debates
            .get_mut(id)
            .ok_or_else(|| StoreError::DebateNotFound(id.clone()))?;
        debate.last_updated = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::{Participant, RoleTag, UserId};

    async fn seeded_store() -> (MemoryDebateStore, DebateId) {
        let store = MemoryDebateStore::new();
        let debate = Debate::new(
            "d1",
            "t1",
            "Climate Change",
            vec![
                Participant::human(Some(UserId::new("u1"))),
                Participant::responder(1, Some("AI Alpha".to_string()), None),
            ],
        );
        let id = debate.id.clone();
        store.insert_debate(debate).await;
        (store, id)
    }

    async fn append(store: &MemoryDebateStore, id: &DebateId, sender: RoleTag, text: &str) {
        let draft = MessageDraft::new(id.clone(), sender, None, text, 1).unwrap();
        store.create_message(draft).await.unwrap();
    }

    #[tokio::test]
    async fn test_sequence_is_monotonic_and_order_total() {
        let (store, id) = seeded_store().await;
        append(&store, &id, RoleTag::User, "first").await;
        append(&store, &id, RoleTag::Responder(1), "second").await;
        append(&store, &id, RoleTag::User, "third").await;

        let all = store.all_messages(&id).await.unwrap();
        let seqs: Vec<_> = all.iter().map(|m| m.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert_eq!(all[0].text, "first");
        assert_eq!(all[2].text, "third");
    }

    #[tokio::test]
    async fn test_recent_messages_are_newest_first_and_bounded() {
        let (store, id) = seeded_store().await;
        for i in 1..=5 {
            append(&store, &id, RoleTag::User, &format!("message {i}")).await;
        }

        let recent = store.recent_messages(&id, 3).await.unwrap();
        let texts: Vec<_> = recent.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["message 5", "message 4", "message 3"]);
    }

    #[tokio::test]
    async fn test_unknown_debate_is_not_found() {
        let store = MemoryDebateStore::new();
        let missing = DebateId::new("missing");

        assert!(store.debate(&missing).await.unwrap().is_none());
        assert!(matches!(
            store.all_messages(&missing).await,
            Err(StoreError::DebateNotFound(_))
        ));
        assert!(matches!(
            store.touch_debate(&missing).await,
            Err(StoreError::DebateNotFound(_))
        ));

        let draft = MessageDraft::human(missing.clone(), None, "hello?", 1).unwrap();
        assert!(matches!(
            store.create_message(draft).await,
            Err(StoreError::DebateNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_touch_advances_last_updated() {
        let (store, id) = seeded_store().await;
        let before = store.debate(&id).await.unwrap().unwrap().last_updated;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.touch_debate(&id).await.unwrap();
        let after = store.debate(&id).await.unwrap().unwrap().last_updated;
        assert!(after > before);
    }
}
