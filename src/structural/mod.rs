//! Structural patterns: how pieces are put together.

pub mod adapter;
pub mod facade;
