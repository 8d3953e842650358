//! Reply generator port
//!
//! Defines the interface for the external reply-generation capability.
//! The capability is optional: when absent or failing, the orchestrator
//! falls back to the deterministic template — see
//! [`ReplyEngine`](crate::use_cases::respond::ReplyEngine).

use agora_domain::DebateId;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during reply generation
///
/// Every variant is recoverable: the orchestrator absorbs all of them into
/// the fallback template and never surfaces them further.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Generator unavailable")]
    Unavailable,

    #[error("Generation timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Which side of the debate a context turn came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakerClass {
    Human,
    Automated,
}

/// One turn of bounded conversational context, oldest first
#[derive(Debug, Clone)]
pub struct ContextTurn {
    pub speaker: SpeakerClass,
    pub text: String,
}

impl ContextTurn {
    pub fn human(text: impl Into<String>) -> Self {
        Self {
            speaker: SpeakerClass::Human,
            text: text.into(),
        }
    }

    pub fn automated(text: impl Into<String>) -> Self {
        Self {
            speaker: SpeakerClass::Automated,
            text: text.into(),
        }
    }
}

/// Request metadata accompanying a generation call
#[derive(Debug, Clone)]
pub struct ReplyMeta {
    pub debate: DebateId,
    /// Display name of the responder the reply is generated for
    pub responder_name: String,
    /// Text of the human message that triggered the fan-out
    pub trigger_text: String,
}

/// External reply-generation capability
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Produce reply text for the given context window and request metadata
    async fn generate(
        &self,
        context: &[ContextTurn],
        meta: &ReplyMeta,
    ) -> Result<String, GeneratorError>;
}
