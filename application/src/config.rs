//! Application configuration

use std::time::Duration;

/// Tunable behavior of the response orchestrator
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    /// How many recent messages each reply-generation call may see
    pub context_window: usize,
    /// Upper bound on a single primary-generator call; expiry counts as a
    /// failure and yields the deterministic fallback
    pub generation_timeout: Duration,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            context_window: 10,
            generation_timeout: Duration::from_secs(30),
        }
    }
}
