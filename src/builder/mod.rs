//! Template construction
//!
//! This module builds role templates in four fixed steps.
//!
//! # Overview
//!
//! - **RoleProfile**: access tier, default permissions and placeholder holder per role
//! - **PassBuilder**: one builder for every role, parameterised by its profile
//! - **PassDirector**: runs the steps in order and reports progress
//!
//! # Usage Example
//!
//! ```rust
//! use event_pass_generator::builder::*;
//! use event_pass_generator::types::*;
//!
//! let mut ids = RandomIdSource;
//! let mut builder = PassBuilder::new(Role::Monitor, &mut ids);
//! let mut progress: Vec<String> = Vec::new();
//!
//! PassDirector::new(&mut builder).build_base_pass(
//!     "Expo",
//!     "2026-02-20",
//!     "Main Auditorium",
//!     Some(&mut progress),
//! );
//!
//! let template = builder.into_pass();
//! assert_eq!(template.holder_name(), "TEMPLATE_MONITOR");
//! assert_eq!(progress.len(), 4);
//! ```

pub mod builder;
pub mod director;
pub mod role_profile;

// Re-export all public types for convenience
pub use builder::*;
pub use director::*;
pub use role_profile::*;
