//! Infrastructure layer for agora
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod channel;
pub mod config;
pub mod generator;
pub mod store;

// Re-export commonly used types
pub use channel::BroadcastChannel;
pub use config::{ConfigLoader, FileConfig};
#[cfg(feature = "gemini")]
pub use generator::gemini::GeminiReplyGenerator;
pub use generator::scripted::{FailingReplyGenerator, StaticReplyGenerator};
pub use store::MemoryDebateStore;
