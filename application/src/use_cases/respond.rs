//! Respond use case
//!
//! The concurrency core: triggered exactly once per persisted human
//! message, it resolves which automated participants must reply, builds
//! their bounded context, and fans out one detached task per responder.
//! Each task generates (with the deterministic fallback as its failure
//! boundary), persists, touches the debate and publishes — independently
//! of its siblings and of the caller, which gets control back as soon as
//! the tasks are dispatched.
//!
//! Per-trigger state machine: Received → RespondersResolved →
//! {per responder: Generating → Persisted → Published} with no join
//! barrier. A partial outcome (one of two responders replied) is an
//! accepted terminal state, not an error.

use crate::config::ResponderConfig;
use crate::ports::debate_channel::DebateChannel;
use crate::ports::debate_store::{DebateStore, StoreError};
use crate::ports::reply_generator::{ContextTurn, ReplyGenerator, ReplyMeta};
use agora_domain::{Debate, DebateId, DomainError, Message, MessageDraft, RoleTag, fallback_reply};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Errors surfaced to the caller of [`ResponseOrchestrator::on_human_message`]
///
/// Only failures *before* the fan-out surface here; once a responder task
/// is dispatched, its failures are logged, never propagated.
#[derive(Error, Debug)]
pub enum RespondError {
    #[error("Debate not found: {0}")]
    DebateNotFound(DebateId),

    #[error("Only human messages trigger responses, got sender '{0}'")]
    NotHumanTrigger(RoleTag),

    #[error("Trigger message belongs to debate '{actual}', not '{expected}'")]
    DebateMismatch { expected: DebateId, actual: DebateId },

    #[error("Invalid reply draft: {0}")]
    InvalidDraft(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// An automated participant selected to produce a reply
#[derive(Debug, Clone)]
pub struct ResponderTarget {
    pub role: RoleTag,
    pub display_name: String,
}

/// Select the participants that must reply to a human message: the
/// automated ones, with their roles resolved through the fallback chain.
/// An empty result is valid and short-circuits the orchestrator.
pub fn select_responders(debate: &Debate) -> Vec<ResponderTarget> {
    debate
        .automated_participants()
        .map(|p| ResponderTarget {
            role: p.resolved_role(),
            display_name: p.name_or_role(),
        })
        .collect()
}

/// Build the bounded context window for a generation call from the store's
/// newest-first recent messages: reversed to oldest-first, sender roles
/// collapsed to human/automated speaker classes.
pub fn build_context(newest_first: &[Message]) -> Vec<ContextTurn> {
    newest_first
        .iter()
        .rev()
        .map(|m| {
            if m.sender.is_user() {
                ContextTurn::human(m.text.clone())
            } else {
                ContextTurn::automated(m.text.clone())
            }
        })
        .collect()
}

/// Reply generation with the deterministic fallback as its boundary
///
/// Attempts the primary capability first, bounded by a timeout; any
/// failure — timeout, generator error, empty output, or no generator
/// configured at all — yields the fallback template. Infallible by
/// construction: nothing generation-related ever escapes this type.
pub struct ReplyEngine {
    primary: Option<Arc<dyn ReplyGenerator>>,
    timeout: Duration,
}

impl ReplyEngine {
    pub fn new(primary: Option<Arc<dyn ReplyGenerator>>, timeout: Duration) -> Self {
        Self { primary, timeout }
    }

    /// Engine that always answers with the fallback template
    pub fn fallback_only() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub async fn generate(&self, context: &[ContextTurn], meta: &ReplyMeta) -> String {
        if let Some(primary) = &self.primary {
            match tokio::time::timeout(self.timeout, primary.generate(context, meta)).await {
                Ok(Ok(text)) if !text.trim().is_empty() => return text,
                Ok(Ok(_)) => {
                    warn!(
                        debate = %meta.debate,
                        responder = %meta.responder_name,
                        "Primary generator returned empty text, using fallback"
                    );
                }
                Ok(Err(e)) => {
                    warn!(
                        debate = %meta.debate,
                        responder = %meta.responder_name,
                        "Primary generator failed: {e}, using fallback"
                    );
                }
                Err(_) => {
                    warn!(
                        debate = %meta.debate,
                        responder = %meta.responder_name,
                        "Primary generator timed out after {:?}, using fallback",
                        self.timeout
                    );
                }
            }
        }
        fallback_reply(&meta.responder_name, &meta.trigger_text)
    }
}

/// Handle over the fan-out dispatched for one trigger
///
/// The tasks are detached: dropping this handle does not cancel them.
/// Callers that want a "generation complete" signal (tests, a CLI printing
/// the transcript) can await [`join_all`](Self::join_all).
pub struct ResponderDispatch {
    handles: Vec<JoinHandle<()>>,
}

impl ResponderDispatch {
    fn new(handles: Vec<JoinHandle<()>>) -> Self {
        Self { handles }
    }

    /// How many responder tasks were dispatched
    pub fn dispatched(&self) -> usize {
        self.handles.len()
    }

    /// Wait for every dispatched task to reach its terminal state
    pub async fn join_all(self) {
        for handle in self.handles {
            if let Err(e) = handle.await {
                warn!("Responder task join error: {e}");
            }
        }
    }
}

/// The response orchestrator service
///
/// One instance is shared by every transport entry point (REST handler,
/// realtime handler, CLI) so the trigger logic exists exactly once.
/// Collaborators are injected, never looked up from ambient state.
pub struct ResponseOrchestrator<S, C> {
    store: Arc<S>,
    channel: Arc<C>,
    engine: Arc<ReplyEngine>,
    config: ResponderConfig,
}

impl<S, C> ResponseOrchestrator<S, C>
where
    S: DebateStore + 'static,
    C: DebateChannel + 'static,
{
    pub fn new(
        store: Arc<S>,
        channel: Arc<C>,
        generator: Option<Arc<dyn ReplyGenerator>>,
        config: ResponderConfig,
    ) -> Self {
        let engine = Arc::new(ReplyEngine::new(generator, config.generation_timeout));
        Self {
            store,
            channel,
            engine,
            config,
        }
    }

    /// Variant of [`on_human_message`](Self::on_human_message) for call
    /// sites that only hold the debate id (e.g. a realtime event payload).
    /// A missing debate surfaces as [`RespondError::DebateNotFound`].
    pub async fn on_human_message_by_id(
        &self,
        debate_id: &DebateId,
        trigger: &Message,
    ) -> Result<ResponderDispatch, RespondError> {
        let debate = self
            .store
            .debate(debate_id)
            .await?
            .ok_or_else(|| RespondError::DebateNotFound(debate_id.clone()))?;
        self.on_human_message(&debate, trigger).await
    }

    /// Entry point: invoked once per durably stored human message. The
    /// trigger must carry the id of `debate`, not of some other debate.
    ///
    /// Returns as soon as the per-responder tasks are dispatched; the
    /// caller never waits on generation. With zero automated participants
    /// this is a no-op with no store or channel side effects.
    pub async fn on_human_message(
        &self,
        debate: &Debate,
        trigger: &Message,
    ) -> Result<ResponderDispatch, RespondError> {
        if !trigger.sender.is_user() {
            return Err(RespondError::NotHumanTrigger(trigger.sender.clone()));
        }
        if trigger.debate != debate.id {
            return Err(RespondError::DebateMismatch {
                expected: debate.id.clone(),
                actual: trigger.debate.clone(),
            });
        }

        let responders = select_responders(debate);
        if responders.is_empty() {
            debug!(debate = %debate.id, "No automated participants, nothing to do");
            return Ok(ResponderDispatch::new(Vec::new()));
        }

        // One context fetch shared by the whole fan-out. Concurrent
        // triggers may race this window; an accepted heuristic limitation.
        let recent = self
            .store
            .recent_messages(&debate.id, self.config.context_window)
            .await?;
        let context = build_context(&recent);

        let mut handles = Vec::with_capacity(responders.len());
        for target in responders {
            let store = Arc::clone(&self.store);
            let channel = Arc::clone(&self.channel);
            let engine = Arc::clone(&self.engine);
            let context = context.clone();
            let meta = ReplyMeta {
                debate: debate.id.clone(),
                responder_name: target.display_name.clone(),
                trigger_text: trigger.text.clone(),
            };
            let round = trigger.round;

            handles.push(tokio::spawn(async move {
                let text = engine.generate(&context, &meta).await;
                if let Err(e) =
                    Self::persist_and_publish(&*store, &*channel, &meta.debate, target.role, text, round)
                        .await
                {
                    // One responder's failure never aborts its siblings.
                    warn!(
                        debate = %meta.debate,
                        responder = %meta.responder_name,
                        "Failed to persist/publish reply: {e}"
                    );
                }
            }));
        }

        info!(
            debate = %debate.id,
            count = handles.len(),
            "Dispatched responder tasks"
        );
        Ok(ResponderDispatch::new(handles))
    }

    async fn persist_and_publish(
        store: &S,
        channel: &C,
        debate: &DebateId,
        role: RoleTag,
        text: String,
        round: u32,
    ) -> Result<(), RespondError> {
        let draft = MessageDraft::reply(debate.clone(), role, text, round)?;
        let message = store.create_message(draft).await?;
        store.touch_debate(debate).await?;
        channel.publish(debate, &message);
        debug!(debate = %debate, seq = message.seq, "Reply persisted and published");
        Ok(())
    }
}
