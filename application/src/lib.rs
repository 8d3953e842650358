//! Application layer for agora
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.
//!
//! The two entry points the core exposes to collaborators live here:
//! [`ResponseOrchestrator::on_human_message`] (invoked after a human
//! message has been durably stored, from whichever transport received it)
//! and [`ScoreDebateUseCase::execute`] (invoked on demand).

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResponderConfig;
pub use ports::{
    debate_channel::{DebateChannel, NoChannel},
    debate_store::{DebateStore, StoreError},
    reply_generator::{ContextTurn, GeneratorError, ReplyGenerator, ReplyMeta, SpeakerClass},
};
pub use use_cases::respond::{
    ReplyEngine, RespondError, ResponderDispatch, ResponderTarget, ResponseOrchestrator,
    build_context, select_responders,
};
pub use use_cases::score::{ScoreDebateUseCase, ScoreError};
