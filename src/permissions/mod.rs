//! Pass permissions
//!
//! This module holds the ordered [`PermissionSet`] every pass carries, together
//! with the names of the permissions the generator grants.
//!
//! # Usage Example
//!
//! ```rust
//! use event_pass_generator::permissions::*;
//!
//! let mut permissions = PermissionSet::new();
//! permissions.add_permission(names::SCAN_QR);
//! permissions.add_permission("   "); // blank input is ignored
//! permissions.add_permission(names::SCAN_QR); // so are duplicates
//!
//! assert_eq!(permissions.to_string(), "[SCAN_QR]");
//! ```

pub mod permission_set;

// Re-export all public types for convenience
pub use permission_set::*;
