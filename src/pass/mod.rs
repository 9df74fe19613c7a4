//! Pass entity and prototype cloning
//!
//! This module contains the [`Pass`] credential, the QR payload derivation, and
//! the [`clone_pass`] function that duplicates a pass under a fresh id.
//!
//! # Invariants
//!
//! - Every pass has its own id; `Pass` has no `Clone` impl.
//! - The QR payload always matches the current id, event name, email and role.
//!
//! # Usage Example
//!
//! ```rust
//! use event_pass_generator::pass::*;
//! use event_pass_generator::types::*;
//!
//! let mut ids = SeededIdSource::new(1);
//! let mut template = Pass::new(ids.next_id());
//! template.set_event_info("Expo", "2026-02-20", "Main Auditorium");
//! template.set_role_and_access(Role::Student, AccessLevel::Basic);
//!
//! let copy = clone_pass(&template, &mut ids);
//! assert_ne!(copy.id(), template.id());
//! assert!(copy.qr_payload().starts_with(&format!("PASS|{}|Expo", copy.id())));
//! ```

pub mod pass;
pub mod prototype;
pub mod qr;

// Re-export all public types for convenience
pub use pass::*;
pub use prototype::*;
pub use qr::*;
