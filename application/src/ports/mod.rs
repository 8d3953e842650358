//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod debate_channel;
pub mod debate_store;
pub mod reply_generator;
