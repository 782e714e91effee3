// Design Patterns Catalog
// Each pattern is shown twice: once with the pattern, once without it.

//! # Design Patterns Catalog
//!
//! Paired "with pattern" / "without pattern" examples:
//!
//! ## Creational Patterns
//! - Builder Pattern (fluent by-value builder vs. positional constructor)
//! - Factory Pattern (closed enum + trait objects vs. manual branching)
//! - Singleton Pattern (OnceLock vs. a fresh connection per call)
//!
//! ## Structural Patterns
//! - Adapter Pattern (Kelvin API adapted to a Celsius consumer)
//! - Facade Pattern (async user registration over three subsystems)
//!
//! ## Behavioral Patterns
//! - Strategy Pattern (payment strategies vs. a string switch)
//! - Observer Pattern (a thread-safe notification registry)
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! cargo run --bin p3_behavioral -- catalog.toml
//! ```
//!
//! ## Observer quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use pattern_catalog::behavioral::observer::{NotificationRegistry, User};
//!
//! let registry = NotificationRegistry::new();
//! let alice = Arc::new(User::new("Alice"));
//! registry.register(alice.clone());
//!
//! assert_eq!(registry.notify("hello").unwrap(), 1);
//! assert_eq!(alice.inbox(), vec!["Alice recebeu a notificação: hello"]);
//! ```

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod error;
pub mod structural;
pub mod telemetry;

pub use config::CatalogConfig;
pub use error::CatalogError;
