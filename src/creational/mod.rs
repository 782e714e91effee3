//! Creational patterns: how objects come into existence.

pub mod builder;
pub mod factory;
pub mod singleton;
