//! Reply generator adapters

#[cfg(feature = "gemini")]
pub mod gemini;
pub mod scripted;

pub use scripted::{FailingReplyGenerator, StaticReplyGenerator};
