//! Behavioral patterns: how objects talk to each other.

pub mod observer;
pub mod strategy;
