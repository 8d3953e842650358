//! Configuration file schema

use agora_application::ResponderConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration file structure
///
/// ```toml
/// [responder]
/// context_window = 10
/// generation_timeout_secs = 30
///
/// [gemini]
/// api_key = "..."
/// model = "gemini-1.5-flash"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub responder: ResponderSection,
    pub gemini: GeminiSection,
}

/// Orchestrator tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponderSection {
    /// Recent messages visible to each generation call
    pub context_window: usize,
    /// Primary generator timeout, in seconds
    pub generation_timeout_secs: u64,
}

impl Default for ResponderSection {
    fn default() -> Self {
        Self {
            context_window: 10,
            generation_timeout_secs: 30,
        }
    }
}

/// Optional Gemini generator settings; without an API key the
/// deterministic fallback is the reply behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSection {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl FileConfig {
    /// Translate the file schema into the application-layer config
    pub fn responder_config(&self) -> ResponderConfig {
        ResponderConfig {
            context_window: self.responder.context_window,
            generation_timeout: Duration::from_secs(self.responder.generation_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_application_defaults() {
        let config = FileConfig::default().responder_config();
        let default = ResponderConfig::default();
        assert_eq!(config.context_window, default.context_window);
        assert_eq!(config.generation_timeout, default.generation_timeout);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: FileConfig = toml::from_str("[responder]\ncontext_window = 4\n").unwrap();
        assert_eq!(config.responder.context_window, 4);
        assert_eq!(config.responder.generation_timeout_secs, 30);
        assert!(config.gemini.api_key.is_none());
    }
}
