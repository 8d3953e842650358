//! Publish channel adapters

pub mod broadcast;

pub use broadcast::BroadcastChannel;
