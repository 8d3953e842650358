//! The deterministic fallback reply
//!
//! This template is a first-class contract, not just an error path: it is
//! the reply text whenever no primary generator is configured, and the
//! recovery text whenever the primary fails or times out. The trigger text
//! is substituted verbatim.

/// Render the fallback counter-argument for a responder.
pub fn fallback_reply(display_name: &str, trigger_text: &str) -> String {
    format!(
        "(Mock {}) Counter-argument to: \"{}\"",
        display_name, trigger_text
    )
}
