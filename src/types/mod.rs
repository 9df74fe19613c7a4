//! Core types and identifiers for the pass generator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based [`PassId`] and the [`IdSource`] that mints them
//! - **Enums**: [`Role`], [`AccessLevel`] and [`OutputFormat`]
//! - **Configuration**: CLI arguments, config file loading and validation
//!
//! # Usage Example
//!
//! ```rust
//! use event_pass_generator::types::*;
//!
//! let role: Role = "monitor".parse().unwrap();
//! assert_eq!(role, Role::Monitor);
//!
//! let mut ids = SeededIdSource::new(42);
//! assert_ne!(ids.next_id(), ids.next_id());
//!
//! let config = PassConfig { role: "student".to_string(), ..Default::default() };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
