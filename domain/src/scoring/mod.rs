//! Heuristic scoring of debate contributions

pub mod engine;
pub mod value_objects;
