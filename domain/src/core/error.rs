//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Message text cannot be empty")]
    EmptyMessageText,

    #[error("Round number must be at least 1")]
    InvalidRound,

    #[error("Invalid role tag: {0}")]
    InvalidRoleTag(String),

    #[error("Responder slot must be between 1 and 9, got {0}")]
    InvalidResponderSlot(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_role_tag_display() {
        let error = DomainError::InvalidRoleTag("moderator".to_string());
        assert_eq!(error.to_string(), "Invalid role tag: moderator");
    }

    #[test]
    fn test_empty_message_text_display() {
        assert_eq!(
            DomainError::EmptyMessageText.to_string(),
            "Message text cannot be empty"
        );
    }
}
