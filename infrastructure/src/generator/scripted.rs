//! Scripted generators for demos and tests

use agora_application::ports::reply_generator::{
    ContextTurn, GeneratorError, ReplyGenerator, ReplyMeta,
};
use async_trait::async_trait;

/// Generator that always answers with the same text
pub struct StaticReplyGenerator {
    reply: String,
}

impl StaticReplyGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl ReplyGenerator for StaticReplyGenerator {
    async fn generate(
        &self,
        _context: &[ContextTurn],
        _meta: &ReplyMeta,
    ) -> Result<String, GeneratorError> {
        Ok(self.reply.clone())
    }
}

/// Generator that always fails; exercises the fallback path end to end
pub struct FailingReplyGenerator;

#[async_trait]
impl ReplyGenerator for FailingReplyGenerator {
    async fn generate(
        &self,
        _context: &[ContextTurn],
        _meta: &ReplyMeta,
    ) -> Result<String, GeneratorError> {
        Err(GeneratorError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::DebateId;

    fn meta() -> ReplyMeta {
        ReplyMeta {
            debate: DebateId::new("d1"),
            responder_name: "AI Alpha".to_string(),
            trigger_text: "prove it".to_string(),
        }
    }

    #[tokio::test]
    async fn test_static_generator_echoes_configured_reply() {
        let generator = StaticReplyGenerator::new("scripted rebuttal");
        let reply = generator.generate(&[], &meta()).await.unwrap();
        assert_eq!(reply, "scripted rebuttal");
    }

    #[tokio::test]
    async fn test_failing_generator_always_errors() {
        let generator = FailingReplyGenerator;
        assert!(generator.generate(&[], &meta()).await.is_err());
    }
}
