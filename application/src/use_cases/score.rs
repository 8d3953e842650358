//! Score debate use case
//!
//! Loads a debate and its full message history as one consistent snapshot,
//! runs the pure scoring engine, and stamps the result into an immutable
//! [`ScoreSummary`]. In-flight responder replies are simply not part of
//! the snapshot; re-scoring later produces a new summary.

use crate::ports::debate_store::{DebateStore, StoreError};
use agora_domain::{DebateId, ScoreSummary, score};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while scoring a debate
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Debate not found: {0}")]
    DebateNotFound(DebateId),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Use case for computing a debate's score summary on demand
pub struct ScoreDebateUseCase<S> {
    store: Arc<S>,
}

impl<S: DebateStore> ScoreDebateUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, debate_id: &DebateId) -> Result<ScoreSummary, ScoreError> {
        let debate = self
            .store
            .debate(debate_id)
            .await?
            .ok_or_else(|| ScoreError::DebateNotFound(debate_id.clone()))?;

        let messages = self.store.all_messages(debate_id).await?;
        debug!(
            debate = %debate_id,
            messages = messages.len(),
            "Scoring debate snapshot"
        );

        let scorecard = score(&debate.topic_name, &debate.participants, &messages);
        Ok(ScoreSummary::new(
            debate.id,
            scorecard,
            debate.topic_name,
            messages.len(),
            Utc::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::{Debate, Message, MessageDraft, Participant, RoleTag, UserId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct SnapshotStore {
        debate: Option<Debate>,
        messages: Mutex<Vec<Message>>,
    }

    impl SnapshotStore {
        fn new(debate: Option<Debate>, texts: &[(&RoleTag, &str)]) -> Self {
            let debate_id = debate
                .as_ref()
                .map(|d| d.id.clone())
                .unwrap_or_else(|| DebateId::new("missing"));
            let messages = texts
                .iter()
                .enumerate()
                .map(|(i, (role, text))| Message {
                    seq: i as u64 + 1,
                    debate: debate_id.clone(),
                    sender: (*role).clone(),
                    sender_user: None,
                    text: text.to_string(),
                    round: 1,
                    created_at: chrono::Utc::now(),
                })
                .collect();
            Self {
                debate,
                messages: Mutex::new(messages),
            }
        }
    }

    #[async_trait]
    impl DebateStore for SnapshotStore {
        async fn debate(&self, _id: &DebateId) -> Result<Option<Debate>, StoreError> {
            Ok(self.debate.clone())
        }

        async fn recent_messages(
            &self,
            _id: &DebateId,
            limit: usize,
        ) -> Result<Vec<Message>, StoreError> {
            let messages = self.messages.lock().unwrap();
            Ok(messages.iter().rev().take(limit).cloned().collect())
        }

        async fn all_messages(&self, _id: &DebateId) -> Result<Vec<Message>, StoreError> {
            Ok(self.messages.lock().unwrap().clone())
        }

        async fn create_message(&self, _draft: MessageDraft) -> Result<Message, StoreError> {
            unreachable!("scoring never writes")
        }

        async fn touch_debate(&self, _id: &DebateId) -> Result<(), StoreError> {
            unreachable!("scoring never writes")
        }
    }

    fn sample_debate() -> Debate {
        Debate::new(
            "d1",
            "t1",
            "Climate Change",
            vec![
                Participant::human(Some(UserId::new("u1"))),
                Participant::responder(1, Some("AI Alpha".to_string()), None),
            ],
        )
    }

    #[tokio::test]
    async fn test_missing_debate_surfaces_not_found() {
        let store = Arc::new(SnapshotStore::new(None, &[]));
        let result = ScoreDebateUseCase::new(store)
            .execute(&DebateId::new("nope"))
            .await;
        assert!(matches!(result, Err(ScoreError::DebateNotFound(_))));
    }

    #[tokio::test]
    async fn test_summary_carries_snapshot_metadata() {
        let store = Arc::new(SnapshotStore::new(
            Some(sample_debate()),
            &[
                (&RoleTag::User, "climate change demands action because the data is clear"),
                (&RoleTag::Responder(1), "however the research paints a more nuanced picture"),
            ],
        ));
        let summary = ScoreDebateUseCase::new(store)
            .execute(&DebateId::new("d1"))
            .await
            .unwrap();

        assert_eq!(summary.topic_name, "Climate Change");
        assert_eq!(summary.message_count, 2);
        assert_eq!(summary.breakdown.len(), 2);
    }

    #[tokio::test]
    async fn test_rescoring_unchanged_history_is_identical() {
        let store = Arc::new(SnapshotStore::new(
            Some(sample_debate()),
            &[(&RoleTag::User, "the data and research say we must act, therefore we will")],
        ));
        let use_case = ScoreDebateUseCase::new(store);

        let first = use_case.execute(&DebateId::new("d1")).await.unwrap();
        let second = use_case.execute(&DebateId::new("d1")).await.unwrap();

        assert_eq!(first.breakdown, second.breakdown);
        assert_eq!(first.averages, second.averages);
        assert_eq!(first.message_count, second.message_count);
    }

    #[tokio::test]
    async fn test_empty_history_scores_everyone_zero() {
        let store = Arc::new(SnapshotStore::new(Some(sample_debate()), &[]));
        let summary = ScoreDebateUseCase::new(store)
            .execute(&DebateId::new("d1"))
            .await
            .unwrap();

        assert!(summary.breakdown.iter().all(|e| e.total == 0));
        assert_eq!(summary.averages.total, 0);
        assert_eq!(summary.message_count, 0);
    }
}
