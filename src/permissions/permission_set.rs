//! Ordered permission set carried by every pass
//!
//! This module contains the PermissionSet struct and the well-known permission names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission names granted by role defaults or post-clone rules
pub mod names {
    /// Professors may create events
    pub const CREATE_EVENT: &str = "CREATE_EVENT";
    /// Professors may export attendance sheets
    pub const EXPORT_ATTENDANCE: &str = "EXPORT_ATTENDANCE";
    /// Monitors scan attendee codes
    pub const SCAN_QR: &str = "SCAN_QR";
    /// Monitors log entries and exits
    pub const REGISTER_ENTRY_EXIT: &str = "REGISTER_ENTRY_EXIT";
    /// Students may enter the event
    pub const ENTER_EVENT: &str = "ENTER_EVENT";
    /// Added to every pass issued from a monitor template
    pub const CHECK_ATTENDANCE_LIST: &str = "CHECK_ATTENDANCE_LIST";
}

/// Insertion-ordered set of permission names
///
/// Blank names are dropped and a name already present is not added twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    permissions: Vec<String>,
}

impl PermissionSet {
    /// Create a new empty permission set
    pub fn new() -> Self {
        Self { permissions: Vec::new() }
    }

    /// Create a permission set from a list, applying the same rules as [`add_permission`](Self::add_permission)
    pub fn with_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for permission in permissions {
            set.add_permission(permission.as_ref());
        }
        set
    }

    /// Add a permission to the set
    ///
    /// Returns `true` when the permission was appended. Input is trimmed;
    /// blank input and names already present are ignored.
    pub fn add_permission(&mut self, permission: &str) -> bool {
        let permission = permission.trim();
        if permission.is_empty() || self.contains(permission) {
            return false;
        }
        self.permissions.push(permission.to_string());
        true
    }

    /// Check whether a permission is present
    pub fn contains(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Iterate permissions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }

    /// Permissions in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.permissions
    }

    /// Check if the permission set is empty
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Get the number of permissions
    pub fn len(&self) -> usize {
        self.permissions.len()
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.permissions.is_empty() {
            return f.write_str("none");
        }
        write!(f, "[{}]", self.permissions.join(", "))
    }
}
