//! Gemini reply generator
//!
//! HTTP adapter for the Gemini `generateContent` endpoint. Any transport,
//! status or shape problem maps into [`GeneratorError`], which the
//! orchestrator's reply engine absorbs into the deterministic fallback —
//! this adapter never needs to be reliable, only honest about failure.

use agora_application::ports::reply_generator::{
    ContextTurn, GeneratorError, ReplyGenerator, ReplyMeta, SpeakerClass,
};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// [`ReplyGenerator`] backed by the Gemini HTTP API
pub struct GeminiReplyGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiReplyGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint base URL (self-hosted proxies, local stubs)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Flatten the context window and request metadata into one prompt.
    fn build_prompt(context: &[ContextTurn], meta: &ReplyMeta) -> String {
        let mut prompt = String::new();
        prompt.push_str(&format!(
            "You are {}, an automated debate participant. \
             Reply with a concise counter-argument to the human's latest message.\n\n\
             Recent debate transcript, oldest first:\n",
            meta.responder_name
        ));
        for turn in context {
            let speaker = match turn.speaker {
                SpeakerClass::Human => "Human",
                SpeakerClass::Automated => "Responder",
            };
            prompt.push_str(&format!("{}: {}\n", speaker, turn.text));
        }
        prompt.push_str(&format!(
            "\nCounter the following statement:\n{}\n",
            meta.trigger_text
        ));
        prompt
    }

    fn extract_text(body: &Value) -> Option<String> {
        body.get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()
            .map(str::to_string)
    }
}

#[async_trait]
impl ReplyGenerator for GeminiReplyGenerator {
    async fn generate(
        &self,
        context: &[ContextTurn],
        meta: &ReplyMeta,
    ) -> Result<String, GeneratorError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let prompt = Self::build_prompt(context, meta);
        debug!(debate = %meta.debate, model = %self.model, "Calling Gemini");

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            }))
            .send()
            .await
            .map_err(|e| GeneratorError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeneratorError::RequestFailed(format!(
                "Gemini returned status {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        Self::extract_text(&body)
            .ok_or_else(|| GeneratorError::InvalidResponse("no candidate text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::DebateId;

    #[test]
    fn test_prompt_contains_transcript_and_trigger() {
        let context = vec![
            ContextTurn::human("we must act"),
            ContextTurn::automated("(Mock AI Alpha) Counter-argument to: \"we must act\""),
        ];
        let meta = ReplyMeta {
            debate: DebateId::new("d1"),
            responder_name: "AI Beta".to_string(),
            trigger_text: "the data is overwhelming".to_string(),
        };
        let prompt = GeminiReplyGenerator::build_prompt(&context, &meta);
        assert!(prompt.contains("You are AI Beta"));
        assert!(prompt.contains("Human: we must act"));
        assert!(prompt.contains("Responder: (Mock AI Alpha)"));
        assert!(prompt.contains("the data is overwhelming"));
    }

    #[tokio::test]
    async fn test_unreachable_base_url_maps_to_request_failed() {
        // Nothing listens on loopback port 1, the connect fails fast.
        let generator = GeminiReplyGenerator::new("test-key")
            .with_base_url("http://127.0.0.1:1")
            .with_model("gemini-test");
        let meta = ReplyMeta {
            debate: DebateId::new("d1"),
            responder_name: "AI Alpha".to_string(),
            trigger_text: "act now".to_string(),
        };
        let err = generator.generate(&[], &meta).await.unwrap_err();
        assert!(matches!(err, GeneratorError::RequestFailed(_)));
    }

    #[test]
    fn test_extract_text_from_candidate_shape() {
        let body = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "a rebuttal" }] }
            }]
        });
        assert_eq!(
            GeminiReplyGenerator::extract_text(&body).as_deref(),
            Some("a rebuttal")
        );
        assert!(GeminiReplyGenerator::extract_text(&serde_json::json!({})).is_none());
    }
}
